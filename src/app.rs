//! Main application UI and state management.
//! Handles the deck manager interface, card management, study mode and the
//! undo snackbar.

use eframe::egui;
use minddeck_app::export::{export_csv_to_path, export_json_to_path};
use minddeck_app::models::Collection;
use minddeck_app::ops::{self, PendingUndo};
use minddeck_app::store::Store;

/// Application screen states
#[derive(Default)]
enum AppScreen {
    #[default]
    Main,
    Study,
}

/// In-progress edit of an existing card.
struct CardEdit {
    deck_id: i64,
    card_id: i64,
    front: String,
    back: String,
}

/// In-progress edit of a deck's name and description.
struct DeckEdit {
    deck_id: i64,
    name: String,
    description: String,
}

/// Study mode position within the selected deck.
struct StudyState {
    deck_id: i64,
    index: usize,
    showing_back: bool,
}

/// Main application state
pub struct MindDeckApp {
    store: Store,
    collection: Collection,
    selected_deck_index: Option<usize>,

    new_deck_name: String,
    new_deck_description: String,
    current_front: String,
    current_back: String,
    card_edit: Option<CardEdit>,
    deck_edit: Option<DeckEdit>,

    current_screen: AppScreen,
    study: Option<StudyState>,

    pending_undo: Option<PendingUndo>,

    show_confirmation_dialog: bool,
    allowed_to_close: bool,
    show_result_dialog: bool,
    result_message: String,
}

impl eframe::App for MindDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drop the undo once its window has elapsed.
        if self.pending_undo.as_ref().is_some_and(|u| u.is_expired()) {
            self.pending_undo = None;
        }

        match self.current_screen {
            AppScreen::Main => self.render_main_screen(ctx),
            AppScreen::Study => self.render_study_screen(ctx),
        }

        self.render_snackbar(ctx);

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) {
            if self.allowed_to_close {
                // Allow close
            } else {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                self.show_confirmation_dialog = true;
            }
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }

        if self.show_result_dialog {
            egui::Window::new("Result")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_result_dialog = false;
                    }
                });
        }
    }
}

impl MindDeckApp {
    /// Creates the app over a store and the initially loaded collection.
    pub fn new(store: Store, collection: Collection) -> Self {
        let has_decks = !collection.is_empty();
        Self {
            store,
            collection,
            selected_deck_index: if has_decks { Some(0) } else { None },
            new_deck_name: String::new(),
            new_deck_description: String::new(),
            current_front: String::new(),
            current_back: String::new(),
            card_edit: None,
            deck_edit: None,
            current_screen: AppScreen::Main,
            study: None,
            pending_undo: None,
            show_confirmation_dialog: false,
            allowed_to_close: false,
            show_result_dialog: false,
            result_message: String::new(),
        }
    }

    /// Re-reads the collection from the store and clamps the selection.
    fn refresh(&mut self) {
        self.collection = self.store.load();
        self.selected_deck_index = self
            .selected_deck_index
            .filter(|i| *i < self.collection.decks.len());
    }

    fn show_result(&mut self, message: impl Into<String>) {
        self.result_message = message.into();
        self.show_result_dialog = true;
    }

    fn set_undo(&mut self, undo: PendingUndo) {
        self.pending_undo = Some(undo);
    }

    /// Renders the main screen with deck management interface
    fn render_main_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Import/Export buttons
            ui.horizontal(|ui| {
                if ui.button("Export JSON").clicked() {
                    self.handle_export_json();
                }
                if ui.button("Export CSV").clicked() {
                    self.handle_export_csv();
                }
                if ui.button("Import").clicked() {
                    self.handle_import();
                }
            });

            ui.separator();

            // Deck creation section
            ui.heading("Create New Deck");
            ui.horizontal(|ui| {
                ui.label("Deck name:");
                ui.text_edit_singleline(&mut self.new_deck_name);
            });
            ui.horizontal(|ui| {
                ui.label("Description:");
                ui.text_edit_singleline(&mut self.new_deck_description);
            });
            if ui.button("Create Deck").clicked() {
                match ops::create_deck(&self.store, &self.new_deck_name, &self.new_deck_description)
                {
                    Ok(_) => {
                        self.new_deck_name.clear();
                        self.new_deck_description.clear();
                        self.refresh();
                        self.selected_deck_index = Some(0);
                    }
                    Err(e) => self.show_result(e.to_string()),
                }
            }

            ui.separator();

            ui.heading(format!("Decks ({})", self.collection.decks.len()));

            // We store actions to execute after UI rendering to avoid borrowing conflicts
            let mut action_select: Option<usize> = None;
            let mut action_study: Option<usize> = None;
            let mut action_delete: Option<i64> = None;

            egui::ScrollArea::vertical()
                .id_source("decks_list")
                .max_height(150.0)
                .show(ui, |ui| {
                    for (i, deck) in self.collection.decks.iter().enumerate() {
                        let is_selected = self.selected_deck_index == Some(i);

                        ui.horizontal(|ui| {
                            if ui
                                .selectable_label(
                                    is_selected,
                                    format!(
                                        "{}. {} ({} cards)",
                                        i + 1,
                                        deck.name,
                                        deck.cards.len()
                                    ),
                                )
                                .clicked()
                            {
                                action_select = Some(i);
                            }

                            if ui.button("Study").clicked() {
                                action_study = Some(i);
                            }
                            if ui.button("Delete").clicked() {
                                action_delete = Some(deck.id);
                            }
                        });
                    }
                });

            // Execute deferred actions
            if let Some(i) = action_select {
                self.selected_deck_index = Some(i);
            }
            if let Some(i) = action_study {
                self.start_study(i);
            }
            if let Some(id) = action_delete {
                match ops::delete_deck(&self.store, id) {
                    Ok(undo) => {
                        self.set_undo(undo);
                        self.refresh();
                    }
                    Err(e) => self.show_result(e.to_string()),
                }
            }

            ui.separator();

            self.render_selected_deck(ui);
        });
    }

    /// Card management for the currently selected deck.
    fn render_selected_deck(&mut self, ui: &mut egui::Ui) {
        let Some(deck_index) = self.selected_deck_index else {
            ui.label("Select a deck to add cards");
            return;
        };
        let Some(current_deck) = self.collection.decks.get(deck_index) else {
            return;
        };
        let deck_id = current_deck.id;

        let mut action_start_deck_edit = false;
        let mut action_save_deck_edit = false;
        let mut action_cancel_deck_edit = false;

        if self
            .deck_edit
            .as_ref()
            .is_some_and(|e| e.deck_id == deck_id)
        {
            let edit = self.deck_edit.as_mut().unwrap();
            ui.heading("Edit Deck");
            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut edit.name);
            });
            ui.horizontal(|ui| {
                ui.label("Description:");
                ui.text_edit_singleline(&mut edit.description);
            });
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    action_save_deck_edit = true;
                }
                if ui.button("Cancel").clicked() {
                    action_cancel_deck_edit = true;
                }
            });
        } else {
            ui.horizontal(|ui| {
                ui.heading(format!("Selected Deck: {}", current_deck.name));
                if ui.button("Edit deck").clicked() {
                    action_start_deck_edit = true;
                }
            });
            if !current_deck.description.is_empty() {
                ui.label(&current_deck.description);
            }
        }

        if action_start_deck_edit {
            self.deck_edit = Some(DeckEdit {
                deck_id,
                name: self.collection.decks[deck_index].name.clone(),
                description: self.collection.decks[deck_index].description.clone(),
            });
        }
        if action_cancel_deck_edit {
            self.deck_edit = None;
        }
        if action_save_deck_edit {
            if let Some(edit) = self.deck_edit.take() {
                match ops::edit_deck(&self.store, edit.deck_id, &edit.name, &edit.description) {
                    Ok(_) => self.refresh(),
                    Err(e) => self.show_result(e.to_string()),
                }
            }
        }

        ui.horizontal(|ui| {
            ui.label("Front:");
            ui.text_edit_singleline(&mut self.current_front);
        });
        ui.horizontal(|ui| {
            ui.label("Back:");
            ui.text_edit_singleline(&mut self.current_back);
        });

        let mut action_add = false;
        if ui.button("Add Card").clicked() {
            action_add = true;
        }

        ui.separator();

        // Re-borrow: the deck edit above may have refreshed the collection.
        let Some(current_deck) = self.collection.decks.get(deck_index) else {
            return;
        };
        ui.heading(format!("Cards ({})", current_deck.cards.len()));

        let mut action_delete_card: Option<i64> = None;
        let mut action_edit_card: Option<(i64, String, String)> = None;
        let mut action_save_edit = false;
        let mut action_cancel_edit = false;

        egui::ScrollArea::vertical()
            .id_source("cards_list")
            .max_height(200.0)
            .show(ui, |ui| {
                for (i, card) in current_deck.cards.iter().enumerate() {
                    ui.group(|ui| {
                        let editing = self
                            .card_edit
                            .as_ref()
                            .is_some_and(|e| e.card_id == card.id);
                        if editing {
                            let edit = self.card_edit.as_mut().unwrap();
                            ui.horizontal(|ui| {
                                ui.label("Front:");
                                ui.text_edit_singleline(&mut edit.front);
                            });
                            ui.horizontal(|ui| {
                                ui.label("Back:");
                                ui.text_edit_singleline(&mut edit.back);
                            });
                            ui.horizontal(|ui| {
                                if ui.button("Save").clicked() {
                                    action_save_edit = true;
                                }
                                if ui.button("Cancel").clicked() {
                                    action_cancel_edit = true;
                                }
                            });
                        } else {
                            ui.label(format!("{}. Front: {}", i + 1, card.front));
                            ui.label(format!("   Back: {}", card.back));
                            ui.horizontal(|ui| {
                                if ui.button("Edit").clicked() {
                                    action_edit_card =
                                        Some((card.id, card.front.clone(), card.back.clone()));
                                }
                                if ui.button("Delete").clicked() {
                                    action_delete_card = Some(card.id);
                                }
                            });
                        }
                    });
                }
            });

        // Execute deferred actions
        if action_add {
            match ops::add_card(&self.store, deck_id, &self.current_front, &self.current_back) {
                Ok(_) => {
                    self.current_front.clear();
                    self.current_back.clear();
                    self.refresh();
                }
                Err(e) => self.show_result(e.to_string()),
            }
        }
        if let Some((card_id, front, back)) = action_edit_card {
            self.card_edit = Some(CardEdit {
                deck_id,
                card_id,
                front,
                back,
            });
        }
        if action_cancel_edit {
            self.card_edit = None;
        }
        if action_save_edit {
            if let Some(edit) = self.card_edit.take() {
                match ops::edit_card(&self.store, edit.deck_id, edit.card_id, &edit.front, &edit.back)
                {
                    Ok(_) => self.refresh(),
                    Err(e) => self.show_result(e.to_string()),
                }
            }
        }
        if let Some(card_id) = action_delete_card {
            match ops::delete_card(&self.store, deck_id, card_id) {
                Ok(undo) => {
                    self.set_undo(undo);
                    self.refresh();
                }
                Err(e) => self.show_result(e.to_string()),
            }
        }
    }

    /// Renders the study screen: plain flip / next / previous over the deck.
    fn render_study_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(study) = &mut self.study else {
                self.current_screen = AppScreen::Main;
                return;
            };
            let Some(deck) = self.collection.find_deck(study.deck_id) else {
                self.current_screen = AppScreen::Main;
                self.study = None;
                return;
            };
            if deck.cards.is_empty() {
                self.current_screen = AppScreen::Main;
                self.study = None;
                return;
            }

            // Clamp in case cards were deleted since the session started.
            if study.index >= deck.cards.len() {
                study.index = deck.cards.len() - 1;
            }
            let card = &deck.cards[study.index];

            ui.heading(format!("Studying: {}", deck.name));
            ui.label(format!("Card {} of {}", study.index + 1, deck.cards.len()));
            ui.add_space(20.0);

            ui.group(|ui| {
                ui.set_min_height(200.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);

                    ui.heading("Front:");
                    ui.label(&card.front);

                    ui.add_space(20.0);

                    if study.showing_back {
                        ui.heading("Back:");
                        ui.label(&card.back);
                    } else {
                        ui.label("(Click 'Flip' to reveal)");
                    }

                    ui.add_space(20.0);
                });
            });

            ui.add_space(20.0);

            let total = deck.cards.len();
            ui.horizontal(|ui| {
                if ui.button("Flip").clicked() {
                    study.showing_back = !study.showing_back;
                }
                if ui.button("Previous").clicked() {
                    study.index = (study.index + total - 1) % total;
                    study.showing_back = false;
                }
                if ui.button("Next").clicked() {
                    study.index = (study.index + 1) % total;
                    study.showing_back = false;
                }
            });

            ui.add_space(20.0);

            if ui.button("Back to Main Screen").clicked() {
                self.current_screen = AppScreen::Main;
                self.study = None;
            }
        });
    }

    /// Bottom snackbar offering the pending undo until its window closes.
    fn render_snackbar(&mut self, ctx: &egui::Context) {
        if self.pending_undo.is_none() {
            return;
        }
        // Keep repainting so the snackbar disappears on time.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));

        let mut action_undo = false;
        egui::TopBottomPanel::bottom("undo_snackbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(undo) = &self.pending_undo {
                    ui.label(&undo.message);
                }
                if ui.button("Undo").clicked() {
                    action_undo = true;
                }
            });
        });

        if action_undo {
            if let Some(undo) = self.pending_undo.take() {
                if let Err(e) = undo.apply(&self.store) {
                    self.show_result(e.to_string());
                }
                self.refresh();
            }
        }
    }

    fn start_study(&mut self, deck_index: usize) {
        let Some(deck) = self.collection.decks.get(deck_index) else {
            return;
        };
        if deck.cards.is_empty() {
            self.show_result("No cards to study");
            return;
        }
        self.study = Some(StudyState {
            deck_id: deck.id,
            index: 0,
            showing_back: false,
        });
        self.current_screen = AppScreen::Study;
    }

    /// Handles collection export to a JSON file
    fn handle_export_json(&mut self) {
        self.refresh();
        if self.collection.is_empty() {
            self.show_result("No decks to export");
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("minddeck-decks.json")
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            match export_json_to_path(&self.collection, &path) {
                Ok(_) => self.show_result("Decks exported successfully!"),
                Err(e) => self.show_result(format!("Export failed: {e}")),
            }
        }
    }

    /// Handles collection export to a CSV file
    fn handle_export_csv(&mut self) {
        self.refresh();
        if self.collection.is_empty() {
            self.show_result("No decks to export");
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("minddeck-decks.csv")
            .add_filter("CSV files", &["csv"])
            .save_file()
        {
            match export_csv_to_path(&self.collection, &path) {
                Ok(_) => self.show_result("Decks exported successfully!"),
                Err(e) => self.show_result(format!("Export failed: {e}")),
            }
        }
    }

    /// Handles deck import from a JSON or CSV file
    fn handle_import(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Deck files", &["json", "csv"])
            .pick_file()
        {
            match ops::import_file(&self.store, &path) {
                Ok(outcome) => {
                    self.set_undo(outcome.undo);
                    self.refresh();
                }
                Err(e) => self.show_result(format!("Import failed: {e}")),
            }
        }
    }
}
