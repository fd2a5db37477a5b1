mod render_tests;
mod svg_tests;
