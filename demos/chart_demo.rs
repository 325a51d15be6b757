//! Chart demo showing the daily candlestick renderer.
//!
//! Run with: cargo run --example chart_demo --features gui

use eframe::egui;

use stock_chart::chart::ChartWidget;
use stock_chart::market::sample_series;

fn main() -> eframe::Result<()> {
    stock_chart::logging::init_tracing();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_title("Stock Chart - Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Chart Demo",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(ChartDemoApp::new()))
        }),
    )
}

struct ChartDemoApp {
    chart: ChartWidget,
    day_count: usize,
}

impl ChartDemoApp {
    fn new() -> Self {
        let mut chart = ChartWidget::new();
        chart.update_history(sample_series(90));
        Self {
            chart,
            day_count: 90,
        }
    }
}

impl eframe::App for ChartDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("일봉 차트 데모");
                ui.separator();

                ui.add(egui::Slider::new(&mut self.day_count, 1..=200).text("days"));

                if ui.button("Reload").clicked() {
                    self.chart.update_history(sample_series(self.day_count));
                }

                if ui.button("Clear").clicked() {
                    self.chart.clear_all();
                }

                ui.separator();
                ui.label(format!("bars: {}", self.chart.bar_count()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart.show(ui);
        });
    }
}
