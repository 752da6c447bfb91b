//! Student table: sortable headers and click-to-select rows.

use eframe::egui;
use egui_extras::{Column as TableColumn, TableBuilder};
use roster_core::RosterSession;
use shared::domain::{Column, Student};

use crate::controller::events::UiCommand;
use crate::ui::theme::color;

const HEADER_HEIGHT: f32 = 24.0;
const ROW_HEIGHT: f32 = 24.0;

pub fn show_student_table(
    ui: &mut egui::Ui,
    session: &RosterSession,
    commands: &mut Vec<UiCommand>,
) {
    let rows: Vec<&Student> = session.visible_rows().map(|(_, student)| student).collect();
    let selected_row = session.selected_display_row();
    let sort = session.projection().sort();

    egui::Frame::new()
        .fill(color(session.theme().palette().table_background))
        .inner_margin(egui::Margin::same(4))
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .sense(egui::Sense::click())
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(TableColumn::remainder().at_least(120.0).clip(true))
                .column(TableColumn::initial(80.0).at_least(50.0))
                .column(TableColumn::remainder().at_least(120.0).clip(true))
                .header(HEADER_HEIGHT, |mut header| {
                    for column in Column::ALL {
                        header.col(|ui| {
                            let label = match sort {
                                Some(order) if order.column == column => {
                                    format!("{} {}", column.label(), order.direction.arrow())
                                }
                                _ => column.label().to_string(),
                            };
                            let button =
                                egui::Button::new(egui::RichText::new(label).strong()).frame(false);
                            if ui.add(button).clicked() {
                                commands.push(UiCommand::SortBy(column));
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        let display_row = row.index();
                        let student = rows[display_row];
                        row.set_selected(selected_row == Some(display_row));
                        row.col(|ui| {
                            ui.add(egui::Label::new(student.name.as_str()).selectable(false));
                        });
                        row.col(|ui| {
                            ui.add(egui::Label::new(student.age.to_string()).selectable(false));
                        });
                        row.col(|ui| {
                            ui.add(egui::Label::new(student.course.as_str()).selectable(false));
                        });
                        if row.response().clicked() {
                            commands.push(UiCommand::SelectRow(display_row));
                        }
                    });
                });
        });
}
