//! Text commands typed at the terminal

use crate::{
    controller::Intent,
    picker::TimeField,
    presets::{resolve_preset, PresetId},
};

pub const HELP: &str = "\
commands:
  <enter> | toggle        start when idle, stop and clear when running
  start                   start (or restart) the countdown
  stop                    stop, keeping the remaining time
  clear                   zero the countdown snapshot
  preset <id|title>       select a preset action
  deselect                drop the preset selection
  hour|min|sec <value>    settle a wheel on a value
  status                  print the current state
  presets                 list preset actions
  help                    show this help
  quit                    exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Start,
    Stop,
    Clear,
    Deselect,
    Status,
    Presets,
    Help,
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "" | "toggle" => Command::Intent(Intent::StartStopTapped),
        "start" => Command::Start,
        "stop" => Command::Stop,
        "clear" => Command::Clear,
        "deselect" => Command::Deselect,
        "status" => Command::Status,
        "presets" => Command::Presets,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "preset" => Command::Intent(Intent::PresetTapped(parse_preset(arg)?)),
        "hour" | "hours" | "h" => settle(TimeField::Hour, arg)?,
        "min" | "m" => settle(TimeField::Minute, arg)?,
        "sec" | "s" => settle(TimeField::Second, arg)?,
        other => return Err(format!("Unknown command '{}', try 'help'", other)),
    };
    Ok(command)
}

fn parse_preset(arg: &str) -> Result<PresetId, String> {
    if arg.is_empty() {
        return Err("preset needs an id or a title".to_string());
    }
    // Unknown numeric ids go through so the controller can ignore them
    if let Ok(id) = arg.parse::<PresetId>() {
        return Ok(id);
    }
    resolve_preset(arg)
        .map(|preset| preset.id)
        .ok_or_else(|| format!("No preset named '{}'", arg))
}

fn settle(field: TimeField, arg: &str) -> Result<Command, String> {
    let value = arg
        .parse::<i32>()
        .map_err(|e| format!("Invalid {} value '{}': {}", field, arg, e))?;
    Ok(Command::Intent(Intent::FieldScrollSettled { field, value }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_toggles() {
        assert_eq!(parse_command(""), Ok(Command::Intent(Intent::StartStopTapped)));
        assert_eq!(parse_command("  TOGGLE "), Ok(Command::Intent(Intent::StartStopTapped)));
    }

    #[test]
    fn parses_presets_by_id_and_title() {
        assert_eq!(parse_command("preset 3"), Ok(Command::Intent(Intent::PresetTapped(3))));
        assert_eq!(
            parse_command("preset steam eggs"),
            Ok(Command::Intent(Intent::PresetTapped(2)))
        );
        assert_eq!(parse_command("preset 99"), Ok(Command::Intent(Intent::PresetTapped(99))));
        assert!(parse_command("preset nap").is_err());
        assert!(parse_command("preset").is_err());
    }

    #[test]
    fn parses_wheel_values_including_spacers() {
        assert_eq!(
            parse_command("min -1"),
            Ok(Command::Intent(Intent::FieldScrollSettled {
                field: TimeField::Minute,
                value: -1
            }))
        );
        assert!(parse_command("sec ten").is_err());
    }

    #[test]
    fn rejects_unknown_verbs() {
        assert!(parse_command("launch").is_err());
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }
}
