use indoc::indoc;

// Help text template with placeholder
pub const HELP_TEMPLATE: &str = indoc! {r#"
    Examples:
      # Creating a 10-slot log and appending a message
      %BINARY_NAME% log.bin --capacity 10 append "Hello, world!"

      # Appending from stdin
      echo "Hello, world!" | %BINARY_NAME% log.bin append

      # Appending a long message, cut to the payload size
      %BINARY_NAME% log.bin append --truncate "$(cat notes.txt)"

      # Reading slot 3
      %BINARY_NAME% log.bin read 3

      # Dumping all slots, oldest first
      %BINARY_NAME% log.bin dump --chronological

      # Displaying storage file info
      %BINARY_NAME% log.bin info
"#};
