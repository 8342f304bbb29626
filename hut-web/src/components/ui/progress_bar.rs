use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub filled: u8,
    pub segments: u8,
}

#[function_component(ProgressBar)]
pub fn progress_bar(p: &Props) -> Html {
    html! {
        <div class="progress-bar" role="progressbar"
            aria-valuemin="0"
            aria-valuemax={p.segments.to_string()}
            aria-valuenow={p.filled.min(p.segments).to_string()}>
            { for (0..p.segments).map(|idx| html! {
                <span class={classes!("progress-segment", (idx < p.filled).then_some("filled"))}></span>
            }) }
        </div>
    }
}
