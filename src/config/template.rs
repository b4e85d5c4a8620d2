/// Starter `.lintconf.toml` written by `lintconf --init`.
pub fn generate_init_template() -> String {
	r#"# lintconf rule configuration
#
# Each key under [rules] configures one rule. Unknown rules and malformed
# values are reported; the rule then keeps its default settings.

[rules]
# [warning] or [warning, error]
line_length = [120, 200]
force_cast = "error"

[rules.identifier_name]
min_length = { warning = 3, error = 2 }
max_length = { warning = 40, error = 60 }
excluded = ["id"]

[rules.trailing_whitespace]
ignores_empty_lines = false
ignores_comments = true
severity = "warning"

[rules.overridden_super_call]
severity = "warning"
# "*" drops every built-in method name
excluded = []
included = ["*"]

# [rules.custom_rules.no_print]
# regex = "print\\("
# message = "Use the logger instead of print"
# severity = "error"
"#
	.to_string()
}
