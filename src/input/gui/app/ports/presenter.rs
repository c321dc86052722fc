use egui::Context as EguiContext;
use winit::window::Window;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;

pub trait GuiPresenterPort {
    fn new(window: &'static Window) -> Self;
    /// Copies a rendered pattern into the framebuffer. Returns false when the
    /// pattern does not match the current surface size.
    fn present_pattern(&mut self, pattern: &PixelBuffer) -> bool;
    fn clear(&mut self, colour: Colour);
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32);
}
