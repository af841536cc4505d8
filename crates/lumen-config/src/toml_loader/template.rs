//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Lumen Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[provider]
# Leave empty to read the key from the GEMINI_API_KEY environment variable
# (a .env file in the working directory also works).
api_key = ""
# model = "gemini-1.5-flash"
# base_url = "https://generativelanguage.googleapis.com/v1beta"
# timeout_secs = 120         # 5-600
# connect_timeout_secs = 10  # 1-60

[attachments]
# max_file_size_mb = 5       # 1-20

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
