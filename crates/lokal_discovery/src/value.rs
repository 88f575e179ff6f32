//! Default-value resolution for discovered members.
//!
//! The default text of a member is resolved progressively and never fails:
//!
//! 1. the live text returned by the member's accessor (text members only,
//!    empty text counts as no value),
//! 2. the `display(name = ..)` label,
//! 3. the `display_name` label,
//! 4. the bare member identifier.

use core::any::Any;

use lokal_reflect::classify;
use lokal_reflect::{Accessor, MemberInfo, TypeInfo};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Resolves the default text of `member`, declared on `declaring_type`.
///
/// A panicking constructor or accessor only degrades to the next fallback.
/// The process panic hook still runs first, so the default hook prints a
/// `thread '..' panicked` report to stderr for each one; install a quieter
/// hook with [`std::panic::set_hook`] when sweeping types whose `Default`
/// may panic. The panic message is also logged at `trace`.
pub fn resolve_value(declaring_type: &TypeInfo, member: &MemberInfo) -> String {
    if classify::is_text(member.return_type().get())
        && let Some(value) = read_live_text(declaring_type, member)
        && !value.is_empty()
    {
        return value;
    }

    let attributes = member.attributes();
    if let Some(label) = attributes.display_label() {
        return label.to_string();
    }
    if let Some(display_name) = attributes
        .display_name
        .as_deref()
        .filter(|name| !name.is_empty())
    {
        return display_name.to_string();
    }

    member.name().to_string()
}

/// Invokes the member's accessor, on a fresh instance when it needs one.
///
/// Panics raised while constructing the instance or reading the value are
/// caught and reported as "no value".
fn read_live_text(declaring_type: &TypeInfo, member: &MemberInfo) -> Option<String> {
    let result = match member.accessor()? {
        Accessor::Static(read) => catch_unwind(read),
        Accessor::Instance(read) => {
            let Some(construct) = declaring_type.constructor() else {
                tracing::trace!(
                    type_name = declaring_type.full_name(),
                    member = member.name(),
                    "No constructor, skipping live value"
                );
                return None;
            };
            catch_unwind(AssertUnwindSafe(|| read(&*construct())))
        }
    };

    match result {
        Ok(value) => value,
        Err(payload) => {
            tracing::trace!(
                type_name = declaring_type.full_name(),
                member = member.name(),
                panic = panic_message(payload.as_ref()),
                "Reading live value panicked"
            );
            None
        }
    }
}

/// Text of a panic payload raised by `panic!` with a message.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-text panic payload")
}
