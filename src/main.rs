//! Stock Chart - main application entry point
//!
//! A stock-detail view with a daily candlestick chart, fed by the mock
//! datafeed (or the REST backend when configured).

use eframe::egui;
use tracing::warn;

use stock_chart::chart::{format_price, ChartWidget, DOWN_COLOR, UP_COLOR};
use stock_chart::market::{BarSeries, Datafeed, MockDatafeed, PriceDirection, Stock};

#[tokio::main]
async fn main() -> eframe::Result<()> {
    stock_chart::logging::init_tracing();

    let datafeed = MockDatafeed::new();
    let code = "005930";

    let stock = match datafeed.query_stock(code).await {
        Ok(stock) => Some(stock),
        Err(e) => {
            warn!("stock snapshot query failed: {}", e);
            None
        }
    };
    let series = match datafeed.query_daily_chart(code).await {
        Ok(series) => series,
        Err(e) => {
            warn!("daily chart query failed: {}", e);
            BarSeries::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_title("Stock Chart"),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Chart",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(StockChartApp::new(stock, series)))
        }),
    )
}

/// Application state: one stock header plus its daily chart
struct StockChartApp {
    stock: Option<Stock>,
    chart: ChartWidget,
}

impl StockChartApp {
    fn new(stock: Option<Stock>, series: BarSeries) -> Self {
        let mut chart = ChartWidget::new();
        chart.update_history(series);
        Self { stock, chart }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        let Some(stock) = &self.stock else {
            ui.label("종목 정보 없음");
            return;
        };

        ui.horizontal(|ui| {
            ui.heading(&stock.name);
            ui.label(&stock.code);
            ui.separator();

            ui.label(format!("{}원", format_price(stock.current_price)));

            let direction = if stock.change_rate >= 0.0 {
                PriceDirection::Up
            } else {
                PriceDirection::Down
            };
            let (sign, color) = match direction {
                PriceDirection::Down => ("", DOWN_COLOR),
                _ => ("+", UP_COLOR),
            };
            ui.colored_label(
                egui::Color32::from_rgb(color.r, color.g, color.b),
                format!(
                    "{}{}원 ({}{:.2}%)",
                    sign,
                    format_price(stock.change_price),
                    sign,
                    stock.change_rate
                ),
            );
        });
    }
}

impl eframe::App for StockChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("stock_header").show(ctx, |ui| {
            self.show_header(ui);
            ui.label(format!("일봉 {}건", self.chart.bar_count()));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart.show(ui);
        });
    }
}
