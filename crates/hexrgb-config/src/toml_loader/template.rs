//! Default TOML config template with inline documentation comments.

/// The default config file, every option commented out at its default value.
pub fn default_config_toml() -> String {
    r##"# hexrgb configuration
# Only override what you want to change -- missing fields use defaults.

[logging]
# level = "WARNING"      # DEBUG | INFO | WARNING | ERROR

[output]
# format = "text"        # text | json

[encode]
# Reject channels outside 0-255 instead of clamping them.
# strict = false

[demo]
# Inputs used when hexrgb runs without a subcommand.
# rgb = [255, 100, 50]   # each 0-255
# hex = "#FF6432"
"##
    .to_string()
}
