//! Native window entry point: logging, runtime, eframe bootstrap and the
//! per-frame loop.

use stakedash::app::{App, Screen};
use stakedash::ui::widgets::notifications::NotificationManager;
use stakedash::ui::widgets::{nav_bar, status_bar};
use stakedash::ui::{screens, theme};
use stakedash::utils::runtime::TOKIO_RT;

fn main() -> eframe::Result<()> {
    let _log_guard = stakedash::logging::init();

    // Enter the global runtime so tokio::spawn works from UI handlers; the
    // guard must outlive the frame loop.
    let _runtime_guard = TOKIO_RT.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0])
            .with_title("StakeDash"),
        ..Default::default()
    };

    eframe::run_native(
        "stakedash",
        options,
        Box::new(|cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::new()))
        }),
    )
}

/// eframe wrapper: owns the orchestrator and the toast manager.
struct DashboardApp {
    app: App,
    notifications: NotificationManager,
}

impl DashboardApp {
    fn new() -> Self {
        Self {
            app: App::new(),
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply async results and start due polls.
        self.app.on_tick();

        // Drain queued toasts out of state.
        let pending = {
            let mut state = self.app.state.write();
            std::mem::take(&mut state.pending_notifications)
        };
        for (level, message) in pending {
            self.notifications.push(level, message);
        }

        // Render against a snapshot; handlers re-lock internally.
        let snapshot = self.app.state.read().clone();

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            nav_bar::render(ui, &snapshot, &mut self.app);
        });
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar::render(ui, &snapshot);
        });
        egui::CentralPanel::default().show(ctx, |ui| match snapshot.current_screen {
            Screen::Connect => screens::connect::render(ui, &snapshot, &mut self.app),
            Screen::Account => screens::account::render(ui, &snapshot, &mut self.app),
            Screen::Staking => screens::staking::render(ui, &snapshot, &mut self.app),
            Screen::Nfts => screens::nfts::render(ui, &snapshot, &mut self.app),
            Screen::History => screens::history::render(ui, &snapshot, &mut self.app),
            Screen::Admin => screens::admin::render(ui, &snapshot, &mut self.app),
        });

        self.notifications.show(ctx);

        // Keep ticking so timer-driven polls fire without user input.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
