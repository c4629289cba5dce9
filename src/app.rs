use crate::config::Config;
use crate::wrap::{CjkWidth, UnicodeWidth, Wrapper};

/// Wraps `input` according to `config`.
///
/// Unless `join_lines` is set, every input line is wrapped on its own and
/// empty input lines come through as empty output lines.
pub fn wrap_input(config: &Config, input: &str) -> Vec<String> {
    if config.cjk {
        wrap_with(&Wrapper::with_measure(CjkWidth), config, input)
    } else {
        wrap_with(&Wrapper::with_measure(UnicodeWidth), config, input)
    }
}

fn wrap_with<W: crate::wrap::DisplayWidth>(
    wrapper: &Wrapper<W>,
    config: &Config,
    input: &str,
) -> Vec<String> {
    if config.join_lines {
        // a trailing newline would otherwise stay glued to the last line
        let text = input
            .strip_suffix("\r\n")
            .or_else(|| input.strip_suffix('\n'))
            .unwrap_or(input);
        return wrapper.wrap(text, config.width);
    }

    let mut lines = Vec::new();
    for line in input.lines() {
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(wrapper.wrap(line, config.width));
    }
    lines
}
