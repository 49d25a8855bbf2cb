//! Tests for the terminal front end.

use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};
use strictly_marks::{GameEngine, Mark, WinInfo};
use strictly_marks_cli::{DisplaySettings, Settings, TerminalView, play, replay};

/// Writer whose contents stay readable after the view is moved into the engine.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn moves(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn viewed_engine(display: DisplaySettings) -> (GameEngine, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let mut engine = GameEngine::new();
    engine.attach(TerminalView::new(display, buffer.clone()));
    (engine, buffer)
}

#[test]
fn test_replay_reports_win() {
    let (mut engine, buffer) = viewed_engine(DisplaySettings::default());
    let summary = replay(
        &mut engine,
        &moves(&["0,0", "1,0", "0,1", "1,1", "0,2"]),
        false,
    )
    .unwrap();

    assert_eq!(summary.applied, 5);
    assert!(summary.rejected.is_empty());
    let result = summary.result.expect("row 0 complete");
    assert_eq!(result.winner(), Mark::First);
    assert_eq!(result.win_info(), Some(WinInfo::Row(0)));

    let text = buffer.text();
    assert!(text.contains("X marked (0, 0) (Top-left)"));
    assert!(text.ends_with("X wins on the row 0\n"));
    assert!(text.contains("X|X|X\n-+-+-\nO|O|.\n-+-+-\n.|.|."));
}

#[test]
fn test_replay_skips_bad_moves() {
    let (mut engine, _buffer) = viewed_engine(DisplaySettings::default());
    let summary = replay(&mut engine, &moves(&["1,1", "1,1", "7,7", "x", "4"]), false).unwrap();

    assert_eq!(summary.applied, 1);
    assert_eq!(summary.rejected.len(), 4);
    assert!(summary.rejected[0].contains("already occupied"));
    assert_eq!(engine.turns_passed(), 1);
    assert_eq!(engine.current_turn(), Mark::Second);
}

#[test]
fn test_strict_replay_aborts() {
    let (mut engine, _buffer) = viewed_engine(DisplaySettings::default());
    let err = replay(&mut engine, &moves(&["0,0", "0,0", "2,2"]), true).unwrap_err();
    assert!(err.to_string().contains("'0,0' rejected"));
    assert_eq!(engine.turns_passed(), 1);
}

#[test]
fn test_play_session() {
    let (mut engine, view) = viewed_engine(DisplaySettings::default());
    let input = Cursor::new("1 1\n1 1\nreset\n0,0\nnonsense\nquit\n2 2\n");
    let mut out = Vec::new();

    play(&mut engine, &DisplaySettings::default(), input, &mut out).unwrap();

    let prompts = String::from_utf8(out).unwrap();
    assert!(prompts.starts_with("X to move\nO to move\n"));
    assert!(prompts.contains("Cell (1, 1) is already occupied"));
    assert!(prompts.contains("Unknown command 'nonsense'"));
    assert!(view.text().contains("New game, X to move"));

    // Input after `quit` is ignored.
    assert_eq!(engine.turns_passed(), 1);
    assert_eq!(engine.board().cell(0, 0), Some(Mark::First));
}

#[test]
fn test_play_board_uses_custom_symbols() {
    let settings: Settings = toml::from_str(
        "[display]\nfirst_symbol = \"A\"\nsecond_symbol = \"B\"\nempty_symbol = \"_\"",
    )
    .unwrap();
    let mut engine = GameEngine::new();
    let input = Cursor::new("0 0\n2,2\nboard\n");
    let mut out = Vec::new();

    play(&mut engine, settings.display(), input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "A to move\nB to move\nA to move\nA|_|_\n-+-+-\n_|_|_\n-+-+-\n_|_|B\n"
    );
}

#[test]
fn test_settings_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_filter = \"debug\"\n\n[display]\nfirst_symbol = \"A\"\nsecond_symbol = \"B\"\nshow_board = false"
    )
    .unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.log_filter(), "debug");
    assert_eq!(settings.display().empty_symbol(), ".");

    let (mut engine, buffer) = viewed_engine(settings.display().clone());
    replay(&mut engine, &moves(&["4", "0"]), true).unwrap();
    assert_eq!(
        buffer.text(),
        "A marked (1, 1) (Center)\nB marked (0, 0) (Top-left)\n"
    );
}

#[test]
fn test_missing_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}
