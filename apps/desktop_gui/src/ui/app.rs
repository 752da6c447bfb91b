use eframe::egui;
use roster_core::{ButtonColors, RosterSession, Theme};

use crate::controller::events::{Notice, UiCommand};
use crate::controller::orchestration::dispatch;
use crate::ui::table::show_student_table;
use crate::ui::theme::{action_button, visuals_for_theme};

const FORM_FIELD_WIDTH: f32 = 260.0;
const SEARCH_FIELD_WIDTH: f32 = 220.0;

pub struct RosterApp {
    session: RosterSession,
    search_text: String,
    notice: Option<Notice>,
    applied_theme: Option<Theme>,
}

impl Default for RosterApp {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterApp {
    pub fn new() -> Self {
        Self {
            session: RosterSession::new(),
            search_text: String::new(),
            notice: None,
            applied_theme: None,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let theme = self.session.theme();
        if self.applied_theme == Some(theme) {
            return;
        }
        ctx.set_visuals(visuals_for_theme(theme));
        self.applied_theme = Some(theme);
    }

    fn show_search_bar(&mut self, ui: &mut egui::Ui, commands: &mut Vec<UiCommand>) {
        ui.horizontal(|ui| {
            ui.label("Search:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_text)
                    .id_salt("roster_search")
                    .hint_text("Search by name or course...")
                    .desired_width(SEARCH_FIELD_WIDTH),
            );
            if response.changed() {
                commands.push(UiCommand::Search(self.search_text.clone()));
            }
        });
    }

    fn show_form(&mut self, ui: &mut egui::Ui, commands: &mut Vec<UiCommand>) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Student Form").strong());
            let form = self.session.form_mut();
            egui::Grid::new("student_form")
                .num_columns(2)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    form_row(ui, "Name:", "form_name", &mut form.name);
                    form_row(ui, "Age:", "form_age", &mut form.age);
                    form_row(ui, "Course:", "form_course", &mut form.course);

                    if ui.add(action_button("Add Student", ButtonColors::ADD)).clicked() {
                        commands.push(UiCommand::AddStudent);
                    }
                    if ui
                        .add(action_button("Delete Selected", ButtonColors::DELETE))
                        .clicked()
                    {
                        commands.push(UiCommand::DeleteSelected);
                    }
                    ui.end_row();

                    if ui
                        .add(action_button("Edit Selected", ButtonColors::EDIT))
                        .clicked()
                    {
                        commands.push(UiCommand::EditSelected);
                    }
                    if ui
                        .add(action_button("Toggle Theme", ButtonColors::TOGGLE_THEME))
                        .clicked()
                    {
                        commands.push(UiCommand::ToggleTheme);
                    }
                    ui.end_row();
                });
        });
    }

    fn show_status_line(&self, ui: &mut egui::Ui) {
        let shown = self.session.projection().len();
        let total = self.session.store().len();
        ui.horizontal(|ui| {
            ui.small(format!("Showing {shown} of {total} students"));
            if let Some(row) = self.session.selected_display_row() {
                ui.separator();
                ui.small(format!("Row {} selected", row + 1));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(format!("{} theme", self.session.theme().label()));
            });
        });
    }

    fn show_notice(&self, ctx: &egui::Context, commands: &mut Vec<UiCommand>) {
        let Some(notice) = &self.notice else {
            return;
        };
        egui::Window::new(notice.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice.message());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    commands.push(UiCommand::DismissNotice);
                }
            });
    }
}

fn form_row(ui: &mut egui::Ui, label: &str, id: &'static str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .id_salt(id)
            .desired_width(FORM_FIELD_WIDTH),
    );
    ui.end_row();
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        let mut commands = Vec::new();
        let interactive = self.notice.is_none();

        egui::TopBottomPanel::top("roster_controls").show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                ui.add_space(4.0);
                self.show_search_bar(ui, &mut commands);
                ui.add_space(4.0);
                self.show_form(ui, &mut commands);
                ui.add_space(4.0);
            });
        });

        egui::TopBottomPanel::bottom("roster_status").show(ctx, |ui| {
            self.show_status_line(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                show_student_table(ui, &self.session, &mut commands);
            });
        });

        self.show_notice(ctx, &mut commands);

        if interactive && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            commands.push(UiCommand::ClearSelection);
        }

        for cmd in commands {
            dispatch(&mut self.session, cmd, &mut self.notice);
        }
    }
}
