use leptos::html;
use leptos::prelude::*;

/// Classes every button carries regardless of variant or size.
const BASE_CLASS: &str = "button";

fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("default") {
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        _ => "button--default",
    }
}

fn size_class(size: Option<&str>) -> &'static str {
    match size.unwrap_or("md") {
        "sm" => "button--sm",
        "lg" => "button--lg",
        _ => "button--md",
    }
}

/// Resolved class list: base, variant, size, then caller classes.
///
/// Caller classes are appended, never substituted, so conflicting utility
/// classes resolve by last-applied-wins at the styling layer.
fn button_class(variant: Option<&str>, size: Option<&str>, extra: &str) -> String {
    let computed = format!("{} {} {}", BASE_CLASS, variant_class(variant), size_class(size));
    if extra.is_empty() {
        computed
    } else {
        format!("{} {}", computed, extra)
    }
}

/// Button component with variants (default, outline, ghost) and sizes (sm, md, lg)
#[component]
pub fn Button(
    /// Button variant: "default", "outline", or "ghost". Unknown values
    /// fall back to "default".
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "sm", "md" (default), or "lg". Unknown values fall
    /// back to "md".
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes, appended after the computed ones
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive); a disabled button emits no clicks
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Handle on the underlying `<button>` element, for callers that need
    /// to focus or measure it
    #[prop(optional)]
    node_ref: NodeRef<html::Button>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let computed_class = move || {
        button_class(
            variant.get().as_deref(),
            size.get().as_deref(),
            class.get().unwrap_or_default().as_str(),
        )
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <button
            node_ref=node_ref
            type=btn_type
            class=computed_class
            disabled=is_disabled
            on:click=move |ev| {
                if is_disabled() {
                    return;
                }
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_fallback() {
        assert_eq!(variant_class(None), "button--default");
        assert_eq!(variant_class(Some("default")), "button--default");
        assert_eq!(variant_class(Some("outline")), "button--outline");
        assert_eq!(variant_class(Some("ghost")), "button--ghost");
        assert_eq!(variant_class(Some("banana")), "button--default");
    }

    #[test]
    fn test_size_fallback() {
        assert_eq!(size_class(None), "button--md");
        assert_eq!(size_class(Some("sm")), "button--sm");
        assert_eq!(size_class(Some("lg")), "button--lg");
        assert_eq!(size_class(Some("xxl")), "button--md");
    }

    #[test]
    fn test_caller_classes_appended_last() {
        assert_eq!(
            button_class(Some("outline"), Some("lg"), "hero__cta"),
            "button button--outline button--lg hero__cta"
        );
        assert_eq!(
            button_class(None, None, ""),
            "button button--default button--md"
        );
    }
}
