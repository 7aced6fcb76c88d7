//! Macros used in this crate.

use std::cmp;

/// Turns the given number of levels of indentation into whitespace.
pub(crate) fn indent(i: isize) -> &'static str {
    let s = "                                                  ";
    &s[0..cmp::min(s.len(), i as usize)]
}

/// Prints the given message to stderr, but only if the first argument
/// evaluates to true.
macro_rules! trace {
    ( $TRACE:expr, $fmt:expr, $($pargs:expr),* ) => {
        if $TRACE {
            eprintln!($fmt, $($pargs),*);
        }
    };
    ( $TRACE:expr, $fmt:expr ) => {
        trace!($TRACE, $fmt, );
    };
}

/// Defines a local `t!` macro that prefixes trace output with the
/// enclosing function's name.
///
/// This is the crate's debug channel: diagnostics emitted through it
/// are for the operator only and are never reflected in returned
/// error values.
macro_rules! tracer {
    ( $TRACE:expr, $func:expr ) => {
        tracer!($TRACE, $func, 0)
    };
    ( $TRACE:expr, $func:expr, $indent:expr ) => {
        tracer!(@define ($) $TRACE, $func, $indent)
    };
    // `$d` is bound to a literal dollar sign, so that the generated
    // `t!` can carry metavariables and repetitions of its own.
    ( @define ($d:tt) $TRACE:expr, $func:expr, $indent:expr ) => {
        /// Traces execution.
        #[allow(unused_macros)]
        macro_rules! t {
            ( $d fmt:expr $d (, $d pargs:expr )* ) => {
                trace!($TRACE, "{}{}: {}",
                       crate::macros::indent($indent), $func,
                       format!($d fmt $d (, $d pargs )*))
            };
        }
    };
}

/// Asserts that the given type is Send and Sync.
macro_rules! assert_send_and_sync {
    ( $x:ty where $( $w:ident $( : $c:path )? ),* ) => {
        impl<$( $w ),*> crate::types::Sendable for $x
            where $( $w: Send + Sync $( + $c )? ),*
            {}
        impl<$( $w ),*> crate::types::Syncable for $x
            where $( $w: Send + Sync $( + $c )? ),*
            {}
    };
    ( $x:ty ) => {
        impl crate::types::Sendable for $x {}
        impl crate::types::Syncable for $x {}
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indentation() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "  ");
    }

    #[test]
    fn t_all_arities() {
        tracer!(false, "t_all_arities");
        t!("no arguments");
        t!("one argument: {}", 1);
        t!("two arguments: {} and {}", 1, 2);
    }
}
