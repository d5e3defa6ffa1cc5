//! Record assembly and bounded rendering
//!
//! One emit call assembles the merged item list (global context, scoped
//! context, logger context, message, call fields) and renders it into a
//! capacity-bounded line. Truncation drops whole trailing items and is
//! reported to the caller; it never corrupts a partially-written item.

use std::borrow::Cow;

use super::context::ContextChain;

/// Default capacity in bytes for a rendered line, including the trailing
/// newline.
pub const DEFAULT_RECORD_CAPACITY: usize = 4096;

/// One key/value pair of a record under assembly.
///
/// A `Cow::Owned` value was produced by a provider during this call; it is
/// dropped exactly once with the item list, whether rendered or truncated
/// away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<'a> {
    pub key: &'a str,
    pub value: Cow<'a, str>,
}

/// A rendered line plus whether trailing items were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub line: String,
    pub truncated: bool,
}

/// Merge the context chains, message, and call fields into a single
/// ordered item list. Providers are evaluated here, once each. Duplicate
/// keys are preserved in order, never deduplicated.
pub fn assemble<'a>(
    global: &'a ContextChain,
    scoped: &'a ContextChain,
    own: &'a ContextChain,
    message: &'a str,
    fields: &'a [(&'a str, &'a str)],
) -> Vec<Item<'a>> {
    let mut items =
        Vec::with_capacity(global.len() + scoped.len() + own.len() + 1 + fields.len());

    for entry in global.iter().chain(scoped.iter()).chain(own.iter()) {
        items.push(Item {
            key: entry.key(),
            value: entry.resolve(),
        });
    }

    items.push(Item {
        key: "message",
        value: Cow::Borrowed(message),
    });

    for &(key, value) in fields {
        items.push(Item {
            key,
            value: Cow::Borrowed(value),
        });
    }

    items
}

/// Serialize `items` as space-separated `key=value` tokens into a line of
/// at most `capacity` bytes, newline included.
///
/// Each item costs `key.len() + 1 + value.len() + 1` bytes: the `=` plus a
/// separator-or-newline byte. The first item that does not fit stops all
/// further writing; whole trailing items are dropped and `truncated` is
/// set. Values are interpolated verbatim, with no escaping.
pub fn render(items: &[Item<'_>], capacity: usize) -> Rendered {
    let mut line = String::new();
    if items.is_empty() {
        return Rendered {
            line,
            truncated: false,
        };
    }
    if capacity == 0 {
        return Rendered {
            line,
            truncated: true,
        };
    }

    // one byte stays reserved for the trailing newline
    let mut remaining = capacity - 1;
    let mut truncated = false;

    for item in items {
        let sep = usize::from(!line.is_empty());
        let needed = sep + item.key.len() + 1 + item.value.len();
        if needed > remaining {
            truncated = true;
            break;
        }
        if sep == 1 {
            line.push(' ');
        }
        line.push_str(item.key);
        line.push('=');
        line.push_str(&item.value);
        remaining -= needed;
    }

    line.push('\n');
    Rendered { line, truncated }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items<'a>(pairs: &[(&'a str, &'a str)]) -> Vec<Item<'a>> {
        pairs
            .iter()
            .map(|&(key, value)| Item {
                key,
                value: Cow::Borrowed(value),
            })
            .collect()
    }

    #[test]
    fn test_render_basic() {
        let items = items(&[("a", "1"), ("b", "2")]);
        let rendered = render(&items, DEFAULT_RECORD_CAPACITY);
        assert_eq!(rendered.line, "a=1 b=2\n");
        assert!(!rendered.truncated);
    }

    #[test]
    fn test_render_single_item() {
        let items = items(&[("message", "hello")]);
        let rendered = render(&items, DEFAULT_RECORD_CAPACITY);
        assert_eq!(rendered.line, "message=hello\n");
        assert!(!rendered.truncated);
    }

    #[test]
    fn test_render_empty_items() {
        let rendered = render(&[], DEFAULT_RECORD_CAPACITY);
        assert_eq!(rendered.line, "");
        assert!(!rendered.truncated);
    }

    #[test]
    fn test_render_exact_fit() {
        // "a=1 b=2\n" is exactly 8 bytes
        let items = items(&[("a", "1"), ("b", "2")]);
        let rendered = render(&items, 8);
        assert_eq!(rendered.line, "a=1 b=2\n");
        assert!(!rendered.truncated);
    }

    #[test]
    fn test_render_drops_whole_trailing_item() {
        // one byte short of fitting the second item
        let items = items(&[("a", "1"), ("b", "2")]);
        let rendered = render(&items, 7);
        assert_eq!(rendered.line, "a=1\n");
        assert!(rendered.truncated);
    }

    #[test]
    fn test_render_truncation_stops_all_writing() {
        // the middle item does not fit; the small final item would, but
        // nothing may be written past the first failure
        let items = items(&[("a", "1"), ("big", "0123456789"), ("z", "9")]);
        let rendered = render(&items, 12);
        assert_eq!(rendered.line, "a=1\n");
        assert!(rendered.truncated);
    }

    #[test]
    fn test_render_nothing_fits() {
        let items = items(&[("message", "a very long message body")]);
        let rendered = render(&items, 4);
        assert_eq!(rendered.line, "\n");
        assert!(rendered.truncated);
    }

    #[test]
    fn test_render_zero_capacity() {
        let items = items(&[("a", "1")]);
        let rendered = render(&items, 0);
        assert_eq!(rendered.line, "");
        assert!(rendered.truncated);
    }

    #[test]
    fn test_render_values_verbatim() {
        let items = items(&[("arg1", "value blah o'ding \"dong\""), ("q", "a=b c")]);
        let rendered = render(&items, DEFAULT_RECORD_CAPACITY);
        assert_eq!(rendered.line, "arg1=value blah o'ding \"dong\" q=a=b c\n");
    }

    #[test]
    fn test_assemble_ordering() {
        let mut global = ContextChain::new();
        global.add("g1", "1");
        global.add("g2", "2");
        let scoped = ContextChain::new();
        let mut own = ContextChain::new();
        own.add("l1", "3");

        let fields = [("f1", "4"), ("f2", "5")];
        let items = assemble(&global, &scoped, &own, "msg", &fields);

        let keys: Vec<&str> = items.iter().map(|i| i.key).collect();
        assert_eq!(keys, vec!["g1", "g2", "l1", "message", "f1", "f2"]);
    }

    #[test]
    fn test_assemble_evaluates_providers_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);

        let mut global = ContextChain::new();
        global.add_dynamic("seq", move || {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            Some("1".to_string())
        });
        let scoped = ContextChain::new();
        let own = ContextChain::new();

        let items = assemble(&global, &scoped, &own, "msg", &[]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(items[0].value, Cow::Owned(_)));
    }

    #[test]
    fn test_assemble_keeps_duplicate_keys() {
        let mut global = ContextChain::new();
        global.add("k", "from-global");
        let scoped = ContextChain::new();
        let own = ContextChain::new();

        let fields = [("k", "from-call")];
        let items = assemble(&global, &scoped, &own, "msg", &fields);
        let rendered = render(&items, DEFAULT_RECORD_CAPACITY);
        assert_eq!(rendered.line, "k=from-global message=msg k=from-call\n");
    }
}
