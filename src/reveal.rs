use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of a section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// One-shot visibility flag for a section's entrance animation.
/// Starts unseen and only ever moves to seen, never back.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevealFlag {
    seen: bool,
}

impl RevealFlag {
    pub fn new() -> Self {
        Self { seen: false }
    }

    pub fn seen(self) -> bool {
        self.seen
    }

    pub fn mark_seen(&mut self) {
        self.seen = true;
    }
}

/// Observes the returned node and flips the flag the first time at least
/// [`REVEAL_THRESHOLD`] of it enters the viewport, then releases the
/// observer. Without IntersectionObserver support the flag stays false and
/// the section renders in its pre-animation state, which only affects
/// transform/opacity, never layout.
#[hook]
pub fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let flag = use_state(RevealFlag::new);

    {
        let flag = flag.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut active: Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)> =
                    None;

                if let Some(element) = node.cast::<web_sys::Element>() {
                    if !flag.seen() {
                        let flag = flag.clone();
                        let on_intersect = Closure::wrap(Box::new(
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                let intersecting = entries.iter().any(|entry| {
                                    entry
                                        .dyn_into::<IntersectionObserverEntry>()
                                        .map(|e| e.is_intersecting())
                                        .unwrap_or(false)
                                });
                                if intersecting {
                                    let mut next = *flag;
                                    next.mark_seen();
                                    flag.set(next);
                                    // One-shot: stop observing after the first hit.
                                    observer.disconnect();
                                }
                            },
                        )
                            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
                        if let Ok(observer) = IntersectionObserver::new_with_options(
                            on_intersect.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            observer.observe(&element);
                            active = Some((observer, on_intersect));
                        }
                    }
                }

                move || {
                    if let Some((observer, closure)) = active {
                        observer.disconnect();
                        drop(closure);
                    }
                }
            },
            node.clone(),
        );
    }

    let seen = flag.seen();
    (node, seen)
}

/// Class list for a reveal-animated child: the base class plus `visible`
/// once its section has been seen.
pub fn reveal_class(base: &'static str, seen: bool) -> Classes {
    classes!(base, seen.then_some("visible"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_starts_unseen() {
        assert!(!RevealFlag::new().seen());
    }

    #[test]
    fn flag_is_monotonic() {
        let mut flag = RevealFlag::new();
        flag.mark_seen();
        assert!(flag.seen());
        // Marking again must not unset it.
        flag.mark_seen();
        assert!(flag.seen());
    }

    #[test]
    fn reveal_class_toggles_visible() {
        assert_eq!(reveal_class("reveal-item", false), classes!("reveal-item"));
        assert_eq!(
            reveal_class("reveal-item", true),
            classes!("reveal-item", "visible")
        );
    }
}
