use std::io::Cursor;

use super::*;
use crate::counter::LineClassifier;
use crate::counter::test_fixtures::{WordCounter, c_syntax};

#[derive(Default)]
struct CountingObserver(usize);

impl LineObserver for CountingObserver {
    fn on_line(&mut self, _event: &LineEvent<'_>) {
        self.0 += 1;
    }
}

#[test]
fn composed_observers_all_see_each_line() {
    let syntax = c_syntax();
    let mut first = CountingObserver::default();
    let mut second = Some(CountingObserver::default());
    let mut absent: Option<CountingObserver> = None;

    LineClassifier::new(&syntax).count_reader(
        Cursor::new("a\nb\n\nc\n"),
        ((&mut first, &mut second), &mut absent),
    );

    assert_eq!(first.0, 4);
    assert_eq!(second.map(|o| o.0), Some(4));
    assert!(absent.is_none());
}

#[test]
fn token_tally_skips_blank_lines() {
    let syntax = c_syntax();
    let counter = WordCounter;
    let mut tally = TokenTally::new(&counter);

    LineClassifier::new(&syntax).count_reader(Cursor::new("int x;\n\n// a b\n"), &mut tally);

    assert_eq!(tally.total(), 2 + 3);
}

#[test]
fn debug_trace_format() {
    let syntax = c_syntax();
    let mut trace = DebugTrace::new("#main.c");

    LineClassifier::new(&syntax).count_reader(Cursor::new("/* a\n\n*/ int x;\n"), &mut trace);

    assert_eq!(
        trace.into_string(),
        "#main.c\n\
         [COMM, cd:0, cm:1, bk:0, iscm:true] /* a\n\
         [BLNK, cd:0, cm:1, bk:1, iscm:true] \n\
         [CODE, cd:1, cm:1, bk:1, iscm:false] */ int x;\n"
    );
}
