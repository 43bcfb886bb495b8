use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// An in-page link that glides to its target instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if scroll::anchor_target(&href).is_some() {
                e.prevent_default();
                scroll::scroll_to_anchor(&href);
            }
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
