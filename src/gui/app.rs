use docscan::common::{Action, Notice};
use docscan::error::ScanError;
use docscan::scanner::ScannerSession;
use eframe::egui;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

const SCAN_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);
const SAVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x21, 0x96, 0xF3);
const VERIFY_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xC1, 0x07);

/// Buttons, image view and status label. All work happens in the session on
/// the UI thread.
pub struct ScannerApp {
    session: ScannerSession,
    texture: Option<egui::TextureHandle>,
}

impl ScannerApp {
    pub fn new(session: ScannerSession) -> Self {
        Self {
            session,
            texture: None,
        }
    }

    fn scan_document(&mut self, ctx: &egui::Context) {
        let Some(path) = FileDialog::new()
            .add_filter("Image Files", &["png", "jpg", "jpeg"])
            .pick_file()
        else {
            return;
        };

        if let Some(notice) = self.session.scan_with_notice(&path) {
            show_notice(&notice);
            return;
        }

        if let Some(image) = self.session.state().current() {
            let rgba = image.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
            let texture = ctx.load_texture("scanned-document", color_image, Default::default());
            self.texture = Some(texture);
        }
    }

    fn save_document(&mut self) {
        if self.session.state().current().is_none() {
            show_notice(&Notice::from_error(Action::Save, &ScanError::NoImage));
            return;
        }

        let Some(path) = FileDialog::new()
            .set_title("Save Document")
            .add_filter("PNG Files", &["png"])
            .add_filter("JPEG Files", &["jpg"])
            .add_filter("PDF Files", &["pdf"])
            .save_file()
        else {
            return;
        };

        show_notice(&self.session.save_with_notice(&path));
    }

    fn verify_with_resources(&mut self) {
        show_notice(&self.session.verify_with_notice());
    }
}

fn show_notice(notice: &Notice) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(notice.title.as_str())
        .set_description(notice.message.as_str())
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn colored_button(
    ui: &mut egui::Ui,
    label: &str,
    fill: egui::Color32,
    text: egui::Color32,
    min_width: f32,
) -> bool {
    let button = egui::Button::new(egui::RichText::new(label).color(text))
        .fill(fill)
        .min_size(egui::vec2(min_width, 28.0));
    ui.add(button).clicked()
}

impl eframe::App for ScannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    let white = egui::Color32::WHITE;
                    let black = egui::Color32::BLACK;
                    if colored_button(ui, "Scan Document", SCAN_COLOR, white, 150.0) {
                        self.scan_document(ctx);
                    }
                    if colored_button(ui, "Save Document", SAVE_COLOR, white, 150.0) {
                        self.save_document();
                    }
                    if colored_button(ui, "Verify with Resources", VERIFY_COLOR, black, 200.0) {
                        self.verify_with_resources();
                    }
                });
                ui.add_space(15.0);

                if let Some(texture) = &self.texture {
                    let max = ui.available_size() - egui::vec2(0.0, 40.0);
                    ui.add(egui::Image::new(texture).max_size(max).maintain_aspect_ratio(true));
                }

                ui.add_space(15.0);
                ui.label(self.session.state().status());
            });
        });
    }
}
