//! Where the crate goes when a collection is empty and must not be.
//!
//! Every path here halts. Test builds can additionally install a scoped,
//! thread-local handler that receives failed assertions instead, see
//! [`with_handler`].

use crate::ContentType;

/// Halts after [`Nonempty::assert`](crate::Nonempty::assert) was handed an
/// empty collection.
#[cfg_attr(panic = "abort", inline)]
#[cfg_attr(not(panic = "abort"), inline(never))]
#[cold]
#[track_caller]
pub(crate) fn assertion_failed(content: ContentType) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(content = %content, "asserted a nonempty collection that was empty");

    panic!("the {content} collection passed was empty")
}

/// Halts after a wrapper was observed holding an empty collection.
///
/// This can only happen if a collection reports itself as nonempty when it
/// is not.
#[cold]
#[track_caller]
pub(crate) fn emptied(content: ContentType) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(content = %content, "nonempty wrapper observed holding an empty collection");

    panic!("a Nonempty<{content}> was observed empty")
}

/// Halts after a growth operation left the wrapped collection empty.
#[cold]
#[track_caller]
pub(crate) fn grew_empty(operation: &'static str, content: ContentType) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(content = %content, operation, "growth left a nonempty collection empty");

    panic!("{operation} left the Nonempty<{content}> empty")
}

#[cfg(all(test, feature = "std"))]
pub(crate) use handler::{report, with_handler};

#[cfg(all(test, feature = "std"))]
mod handler {
    use super::assertion_failed;
    use crate::ContentType;

    use std::{boxed::Box, cell::RefCell};

    type Handler = Box<dyn FnMut(ContentType)>;

    std::thread_local! {
        static HANDLER: RefCell<Option<Handler>> = const { RefCell::new(None) };
    }

    /// Puts back the handler that was active before [`with_handler`], even
    /// when the body unwinds.
    struct Restore(Option<Handler>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            HANDLER.with(|current| *current.borrow_mut() = previous);
        }
    }

    /// Runs `body` with `handler` receiving every failed assertion reported on
    /// this thread.
    pub(crate) fn with_handler<H, R>(handler: H, body: impl FnOnce() -> R) -> R
    where
        H: FnMut(ContentType) + 'static,
    {
        let previous = HANDLER.with(|current| current.borrow_mut().replace(Box::new(handler)));
        let _restore = Restore(previous);
        body()
    }

    /// Hands a failed assertion to the installed handler, or halts if there
    /// is none.
    #[track_caller]
    pub(crate) fn report(content: ContentType) {
        // Not borrowed across the call.
        match HANDLER.with(|current| current.borrow_mut().take()) {
            Some(mut handler) => {
                handler(content);
                HANDLER.with(|current| {
                    current.borrow_mut().get_or_insert(handler);
                });
            }
            None => assertion_failed(content),
        }
    }
}
