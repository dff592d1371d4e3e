use log::debug;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Lets the parent hide the whole card instead of just the image.
    #[prop_or_default]
    pub on_fail: Option<Callback<()>>,
}

/// An `<img>` that removes itself when the asset fails to load.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state(|| false);

    if *failed {
        return html! {};
    }

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        let on_fail = props.on_fail.clone();
        Callback::from(move |_: Event| {
            debug!("hiding image that failed to load: {}", src);
            failed.set(true);
            if let Some(on_fail) = &on_fail {
                on_fail.emit(());
            }
        })
    };

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            loading="eager"
            decoding="async"
            draggable="false"
            {onerror}
        />
    }
}
