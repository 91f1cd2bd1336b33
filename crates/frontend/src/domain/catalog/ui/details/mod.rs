use contracts::domain::selection::ItemDetails;
use leptos::prelude::*;

/// Details of the selected item: heading, description and, when the item has
/// one, an embedded video. Renders nothing while `details` is `None`.
#[component]
pub fn DetailsPanel(
    #[prop(into)] details: Signal<Option<ItemDetails>>,
    video_width: u32,
    video_height: u32,
) -> impl IntoView {
    view! {
        <div id="details" class="details">
            {move || details.get().map(|d| {
                let video = d.video_link.map(|src| view! {
                    <iframe
                        class="details__video"
                        width=video_width.to_string()
                        height=video_height.to_string()
                        src=src
                        allowfullscreen=true
                    ></iframe>
                });
                view! {
                    <h2 class="details__heading">{d.heading}</h2>
                    <p class="details__description">{d.description}</p>
                    {video}
                }
            })}
        </div>
    }
}
