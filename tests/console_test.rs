use std::io::Cursor;

use clienti_tools::services::console::Console;
use clienti_tools::AppError;

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_confirm_accepts_yes_variants() {
    for answer in ["s", "S", "si", "y", "YES"] {
        let mut c = console(&format!("{}\n", answer));
        assert!(c.confirm("Proceed?").unwrap(), "answer {answer}");
    }
}

#[test]
fn test_confirm_rejects_everything_else() {
    for answer in ["n", "", "no", "forse"] {
        let mut c = console(&format!("{}\n", answer));
        assert!(!c.confirm("Proceed?").unwrap(), "answer {answer}");
    }
}

#[test]
fn test_ask_trims_and_echoes_prompt() {
    let mut c = console("  2025-08-15 \r\n");

    assert_eq!(c.ask("Date: ").unwrap(), "2025-08-15");

    let (_, out) = c.into_parts();
    assert_eq!(String::from_utf8(out).unwrap(), "Date: ");
}

#[test]
fn test_ask_parsed() {
    let mut c = console("3\nmany\n");

    let n: u32 = c.ask_parsed("How many? ").unwrap();
    assert_eq!(n, 3);
    assert!(matches!(c.ask_parsed::<u32>("How many? "), Err(AppError::InvalidInput(_))));
}

#[test]
fn test_closed_input() {
    let mut c = console("");

    assert!(matches!(c.ask("Date: "), Err(AppError::InputClosed)));
}
