// src/plot_functions/mod.rs

pub mod plot_cross_metric;
pub mod plot_pass_fail;
pub mod plot_pass_overlay;
pub mod plot_shear_over_time;
pub mod plot_text_pages;
pub mod plot_window_envelopes;
