use playtime_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[test]
fn test_help_command_parsing() {
    let result = Command::parse("/help", "testbot");
    assert!(result.is_ok());
    assert!(matches!(result.unwrap(), Command::Help));
}

#[test]
fn test_start_command_parsing() {
    let result = Command::parse("/start", "testbot");
    assert!(result.is_ok());
    assert!(matches!(result.unwrap(), Command::Start));
}

#[test]
fn test_play_time_command_parsing() {
    let result = Command::parse("/play_time shelby", "testbot");
    assert!(result.is_ok());
    match result.unwrap() {
        Command::PlayTime { ckey } => assert_eq!(ckey, "shelby"),
        _ => panic!("Expected PlayTime command"),
    }
}

#[test]
fn test_play_time_command_keeps_free_text_argument() {
    // Trimming happens in the handler, not the parser.
    let result = Command::parse("/play_time John Doe", "testbot");
    assert!(result.is_ok());
    match result.unwrap() {
        Command::PlayTime { ckey } => assert_eq!(ckey, "John Doe"),
        _ => panic!("Expected PlayTime command"),
    }
}

#[test]
fn test_unknown_command_fails_to_parse() {
    assert!(Command::parse("/schedule", "testbot").is_err());
    assert!(Command::parse("not a command", "testbot").is_err());
}
