use super::Cursor;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_rune() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), 'a');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_returns_consumed_rune() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.advance(), 'a');
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_steps_over_multibyte_runes() {
    let mut cursor = Cursor::new("é→x");
    assert_eq!(cursor.advance(), 'é');
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.advance(), '→');
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), 'x');
}

#[test]
fn advance_at_eof_stays_put() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.advance(), '\0');
    assert_eq!(cursor.pos(), 1);
}

// === Peek ===

#[test]
fn peek_next_looks_one_rune_ahead() {
    let cursor = Cursor::new("1.5");
    assert_eq!(cursor.current(), '1');
    assert_eq!(cursor.peek_next(), '.');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn peek_next_counts_runes_not_bytes() {
    let cursor = Cursor::new("λx");
    assert_eq!(cursor.peek_next(), 'x');
}

#[test]
fn peeks_near_end_return_sentinel() {
    let mut cursor = Cursor::new("a");
    assert_eq!(cursor.peek_next(), '\0');
    cursor.advance();
    assert_eq!(cursor.current(), '\0');
    assert_eq!(cursor.peek_next(), '\0');
}

// === Conditional Advance ===

#[test]
fn eat_consumes_on_match() {
    let mut cursor = Cursor::new("==");
    cursor.advance();
    assert!(cursor.eat('='));
    assert!(cursor.is_eof());
}

#[test]
fn failed_eat_leaves_cursor_untouched() {
    let mut cursor = Cursor::new("=x");
    cursor.advance();
    let before = cursor.pos();
    assert!(!cursor.eat('='));
    assert_eq!(cursor.pos(), before);
    assert_eq!(cursor.current(), 'x');
}

#[test]
fn eat_at_eof_is_false() {
    let mut cursor = Cursor::new("");
    assert!(!cursor.eat('\0'));
    assert!(!cursor.eat('a'));
}

#[test]
fn eat_multibyte_rune() {
    let mut cursor = Cursor::new("ßa");
    assert!(cursor.eat('ß'));
    assert_eq!(cursor.current(), 'a');
}

// === EOF Detection ===

#[test]
fn empty_source_is_eof() {
    assert!(Cursor::new("").is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), '\0');
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), 'b');
}

// === Bulk Movement ===

#[test]
fn eat_while_stops_at_first_mismatch() {
    let mut cursor = Cursor::new("123abc");
    cursor.eat_while(|c| c.is_ascii_digit());
    assert_eq!(cursor.slice_from(0), "123");
    assert_eq!(cursor.current(), 'a');
}

#[test]
fn eat_while_stops_at_eof_even_if_predicate_accepts_sentinel() {
    let mut cursor = Cursor::new("aaa");
    cursor.eat_while(|_| true);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new("// note\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), '\n');
    assert_eq!(cursor.slice_from(0), "// note");
}

#[test]
fn eat_until_newline_without_newline_reaches_eof() {
    let mut cursor = Cursor::new("// trailing comment");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_newline_from_middle() {
    let mut cursor = Cursor::new("ab\ncd\n");
    cursor.advance();
    cursor.advance();
    cursor.advance();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 5);
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let cursor = Cursor::new("hello world");
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
    assert_eq!(cursor.source_len(), 11);
}

#[test]
fn rest_shrinks_as_cursor_advances() {
    let mut cursor = Cursor::new("xyz");
    cursor.advance();
    assert_eq!(cursor.rest(), "yz");
}

#[test]
fn copy_is_a_snapshot() {
    let mut cursor = Cursor::new("abc");
    let snapshot = cursor;
    cursor.advance();
    cursor.advance();
    assert_eq!(snapshot.current(), 'a');
    assert_eq!(cursor.current(), 'c');
}

// === Property Tests ===

mod proptest_lookahead {
    use super::Cursor;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn peeks_and_failed_eats_are_idempotent(source in "\\PC{0,40}", steps in 0usize..40) {
            let mut cursor = Cursor::new(&source);
            for _ in 0..steps {
                cursor.advance();
            }

            let pos = cursor.pos();
            let current = cursor.current();
            let next = cursor.peek_next();

            // repeated probes see the same thing and move nothing
            prop_assert_eq!(cursor.current(), current);
            prop_assert_eq!(cursor.peek_next(), next);
            prop_assert_eq!(cursor.pos(), pos);

            let miss = if current == 'q' { 'z' } else { 'q' };
            prop_assert!(!cursor.eat(miss));
            prop_assert_eq!(cursor.pos(), pos);
            prop_assert_eq!(cursor.current(), current);
        }

        #[test]
        fn advance_visits_every_rune_in_order(source in "\\PC{0,40}") {
            let mut cursor = Cursor::new(&source);
            let mut seen = String::new();
            while !cursor.is_eof() {
                prop_assert!(source.is_char_boundary(cursor.pos()));
                seen.push(cursor.advance());
            }
            prop_assert_eq!(seen, source);
        }

        #[test]
        fn peek_next_is_the_rune_after_current(source in "\\PC{2,20}") {
            let cursor = Cursor::new(&source);
            let mut chars = source.chars();
            prop_assert_eq!(cursor.current(), chars.next().unwrap_or('\0'));
            prop_assert_eq!(cursor.peek_next(), chars.next().unwrap_or('\0'));
        }
    }
}
