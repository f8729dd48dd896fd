//! Main egui application — marketing pages, the chat surface, and the
//! wiring between UI actions, the session store, and the delayed replies.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, ScrollArea, SidePanel, TopBottomPanel};
use gloo_timers::future::TimeoutFuture;

use novachat_core::event_bus::EventBus;
use novachat_core::ports::StoragePort;
use novachat_core::settings::{load_settings, save_settings};
use novachat_core::store::{ReplyRequest, SessionStore, REPLY_DELAY_MS};
use novachat_platform::clipboard;
use novachat_platform::storage::auto_detect_storage;
use novachat_types::event::ChatEvent;
use novachat_types::settings::Settings;
use novachat_ui::pages::{dashboard, home, pricing, PageAction};
use novachat_ui::panels::conversation::{conversation_panel, ChatAction};
use novachat_ui::panels::settings::{settings_dialog, SettingsAction};
use novachat_ui::panels::sidebar::{sidebar_panel, SidebarAction};
use novachat_ui::state::UiState;
use novachat_ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Pricing,
    Chat,
    Dashboard,
}

/// The main application state
pub struct NovaChatApp {
    page: Page,
    store: SessionStore,
    ui_state: UiState,
    settings: Settings,
    /// Filled by the async settings restore; consumed on the next frame.
    restored: Rc<RefCell<Option<Settings>>>,
    event_bus: EventBus,
    storage: Rc<dyn StoragePort>,
    first_frame: bool,
}

impl NovaChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let storage = auto_detect_storage();
        let restored = Rc::new(RefCell::new(None));
        Self::restore_settings(storage.clone(), restored.clone());

        Self {
            page: Page::Home,
            store: SessionStore::new(),
            ui_state: UiState::new(),
            settings: Settings::default(),
            restored,
            event_bus: EventBus::new(),
            storage,
            first_frame: true,
        }
    }

    /// Load persisted settings (async); the result lands in `restored` and
    /// is picked up on the next frame.
    fn restore_settings(storage: Rc<dyn StoragePort>, slot: Rc<RefCell<Option<Settings>>>) {
        wasm_bindgen_futures::spawn_local(async move {
            let settings = load_settings(storage.as_ref()).await;
            log::info!("Settings restored: {:?}", settings);
            *slot.borrow_mut() = Some(settings);
        });
    }

    /// Persist the current settings (async, fire-and-forget).
    fn persist_settings(&self) {
        let storage = self.storage.clone();
        let settings = self.settings.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = save_settings(storage.as_ref(), &settings).await {
                log::warn!("Failed to persist settings: {}", e);
            }
        });
    }

    /// Start the reply timer for a sent message. When it fires, the canned
    /// reply is emitted onto the event bus and delivered on the next frame.
    fn schedule_reply(&self, request: ReplyRequest, ctx: &egui::Context) {
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(REPLY_DELAY_MS).await;
            bus.emit(ChatEvent::ReplyReady {
                conversation: request.conversation,
                ticket: request.ticket,
                content: request.content,
            });
            ctx.request_repaint();
        });
    }

    fn notify(&mut self, ctx: &egui::Context, text: &str) {
        let now = ctx.input(|i| i.time);
        self.ui_state.set_notice(text, now);
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        let palette = theme::palette(self.settings.theme);

        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("NovaChat")
                        .strong()
                        .color(palette.accent)
                        .size(16.0),
                );
                ui.separator();

                for (page, label) in [
                    (Page::Home, "Home"),
                    (Page::Pricing, "Pricing"),
                    (Page::Chat, "Chat"),
                ] {
                    if ui.selectable_label(self.page == page, label).clicked() {
                        self.page = page;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let start = ui.add(
                        egui::Button::new(
                            RichText::new("Start Chatting").color(palette.on_accent),
                        )
                        .fill(palette.accent)
                        .corner_radius(theme::PANEL_ROUNDING),
                    );
                    if start.clicked() {
                        self.page = Page::Chat;
                    }

                    if ui.selectable_label(self.page == Page::Dashboard, "Sign in").clicked() {
                        self.page = Page::Dashboard;
                    }

                    ui.menu_button("🎨", |ui| {
                        let before = self.settings.theme;
                        for theme_choice in novachat_types::settings::ThemeChoice::all() {
                            ui.selectable_value(
                                &mut self.settings.theme,
                                *theme_choice,
                                theme_choice.label(),
                            );
                        }
                        if self.settings.theme != before {
                            theme::apply_theme(ui.ctx(), self.settings.theme);
                            self.persist_settings();
                        }
                    });
                });
            });
        });
    }

    fn chat_page(&mut self, ctx: &egui::Context) {
        let palette = theme::palette(self.settings.theme);

        if self.settings.sidebar_open {
            SidePanel::left("sidebar")
                .min_width(220.0)
                .max_width(300.0)
                .frame(
                    egui::Frame::default()
                        .fill(palette.bg_secondary)
                        .inner_margin(theme::PANEL_PADDING),
                )
                .show(ctx, |ui| {
                    if let Some(action) =
                        sidebar_panel(ui, &self.store, &mut self.ui_state, palette)
                    {
                        match action {
                            SidebarAction::NewChat => {
                                self.store.create_conversation();
                                self.ui_state.cancel_title_edit();
                            }
                            SidebarAction::Select(id) => {
                                self.store.select_conversation(id);
                                self.ui_state.cancel_title_edit();
                            }
                        }
                    }
                });
        }

        CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(palette.bg_primary)
                    .inner_margin(theme::PANEL_PADDING),
            )
            .show(ctx, |ui| {
                let action = conversation_panel(
                    ui,
                    &self.store,
                    &mut self.ui_state,
                    self.settings.sidebar_open,
                    palette,
                );
                if let Some(action) = action {
                    match action {
                        ChatAction::Send(text) => {
                            if let Some(request) = self.store.send_message(&text) {
                                self.schedule_reply(request, ctx);
                            }
                        }
                        ChatAction::Rename(title) => {
                            let active = self.store.active_id();
                            self.store.rename_conversation(active, &title);
                        }
                        ChatAction::ToggleSidebar => {
                            self.settings.sidebar_open = !self.settings.sidebar_open;
                            self.persist_settings();
                        }
                        ChatAction::OpenSettings => {
                            self.ui_state.show_settings = true;
                        }
                        ChatAction::Copy(text) => {
                            clipboard::copy_text(&text);
                            self.notify(ctx, "Copied to clipboard");
                        }
                        ChatAction::SetModel(model) => {
                            self.store.set_model(model);
                        }
                        ChatAction::Stub(text) => {
                            self.notify(ctx, text);
                        }
                    }
                }
            });

        if self.ui_state.show_settings {
            let action = settings_dialog(
                ctx,
                &mut self.ui_state,
                &mut self.settings,
                self.store.model(),
                palette,
            );
            if let Some(action) = action {
                match action {
                    SettingsAction::ThemeChanged => {
                        theme::apply_theme(ctx, self.settings.theme);
                        self.persist_settings();
                    }
                    SettingsAction::ModelChanged(model) => {
                        self.store.set_model(model);
                    }
                    SettingsAction::Saved => {
                        self.persist_settings();
                        self.ui_state.show_settings = false;
                        self.notify(ctx, "Settings saved");
                    }
                    SettingsAction::Stub(text) => {
                        self.notify(ctx, text);
                    }
                }
            }
        }
    }

    fn marketing_page(&mut self, ctx: &egui::Context) {
        let palette = theme::palette(self.settings.theme);
        let page = self.page;

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let action = match page {
                    Page::Home => home::home_page(ui, palette),
                    Page::Pricing => pricing::pricing_page(ui, palette),
                    Page::Dashboard => {
                        dashboard::dashboard_page(ui, palette);
                        None
                    }
                    Page::Chat => None,
                };
                match action {
                    Some(PageAction::OpenChat) => self.page = Page::Chat,
                    Some(PageAction::OpenPricing) => self.page = Page::Pricing,
                    None => {}
                }
            });
        });
    }
}

impl eframe::App for NovaChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx, self.settings.theme);
            self.first_frame = false;
        }

        // Apply asynchronously restored settings exactly once
        if let Some(restored) = self.restored.borrow_mut().take() {
            self.settings = restored;
            theme::apply_theme(ctx, self.settings.theme);
        }

        // Deliver replies whose timers have fired
        for event in self.event_bus.drain() {
            let ChatEvent::ReplyReady {
                conversation,
                ticket,
                content,
            } = event;
            self.store.deliver_reply(conversation, ticket, &content);
        }

        self.top_bar(ctx);

        match self.page {
            Page::Chat => self.chat_page(ctx),
            _ => self.marketing_page(ctx),
        }

        // Keep frames coming while a reply timer is outstanding so the
        // delivery is not stalled until the next input event
        if self.store.has_pending_replies() || self.event_bus.has_pending() {
            ctx.request_repaint();
        }
    }
}
