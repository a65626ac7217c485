//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# glshapes configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[shape]
kind = "circle"          # circle, square

# circle
# radius = 0.5           # (0, 1000]
# rotation_step = 0.0087266463  # radians per perimeter vertex, pi/360
# mode = "compounding"   # compounding, analytic

# square
# side_length = 1.0      # (0, 1000]
# textured = false
# centered = true
# x = 0.0
# y = 0.0

[logging]
# level = "info"         # trace, debug, info, warn, error

[output]
# json = false
"##
}
