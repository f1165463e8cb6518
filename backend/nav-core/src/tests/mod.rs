mod campus;
mod classify;
mod generation;
mod headless_ui;
mod render;
