use dioxus::prelude::*;

/// Text input that reports its value once typing pauses.
///
/// Each keystroke bumps a generation counter; the value is only emitted when
/// no newer keystroke arrived during the debounce delay.
#[component]
pub fn SearchBox(placeholder: String, delay_ms: u32, on_search: EventHandler<String>) -> Element {
    let mut value = use_signal(String::new);
    let mut generation = use_signal(|| 0u64);

    rsx!(input {
        class: "input search-box",
        r#type: "search",
        placeholder: "{placeholder}",
        value: "{value}",
        oninput: move |evt| {
            let text = evt.value();
            value.set(text.clone());
            generation += 1;
            let current = generation();

            spawn(async move {
                #[cfg(feature = "web")]
                gloo_timers::future::TimeoutFuture::new(delay_ms).await;

                if generation() == current {
                    on_search.call(text);
                }
            });
        },
    })
}
