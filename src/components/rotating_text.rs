use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitBy {
    Characters,
    Words,
    Lines,
}

/// Which element starts animating first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaggerFrom {
    First,
    Last,
    Center,
    Index(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub parts: Vec<String>,
    pub needs_space: bool,
}

pub fn split_text(text: &str, split_by: SplitBy) -> Vec<Segment> {
    let pieces: Vec<&str> = match split_by {
        SplitBy::Characters | SplitBy::Words => text.split(' ').collect(),
        SplitBy::Lines => text.split('\n').collect(),
    };
    let last = pieces.len().saturating_sub(1);
    pieces
        .into_iter()
        .enumerate()
        .map(|(i, piece)| Segment {
            parts: match split_by {
                SplitBy::Characters => piece.chars().map(String::from).collect(),
                SplitBy::Words | SplitBy::Lines => vec![piece.to_string()],
            },
            needs_space: i != last,
        })
        .collect()
}

pub fn stagger_delay(index: usize, total: usize, from: StaggerFrom, step_ms: f64) -> f64 {
    let origin = match from {
        StaggerFrom::First => 0,
        StaggerFrom::Last => total.saturating_sub(1),
        StaggerFrom::Center => total / 2,
        StaggerFrom::Index(origin) => origin,
    };
    origin.abs_diff(index) as f64 * step_ms
}

pub fn next_index(current: usize, len: usize, looping: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if current + 1 < len {
        current + 1
    } else if looping {
        0
    } else {
        len - 1
    }
}

struct Rotation {
    index: usize,
    len: usize,
    looping: bool,
}

impl Reducible for Rotation {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Rotation {
            index: next_index(self.index, self.len, self.looping),
            len: self.len,
            looping: self.looping,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct RotatingTextProps {
    pub texts: Vec<&'static str>,
    #[prop_or(2000)]
    pub interval_ms: u32,
    #[prop_or(25.0)]
    pub stagger_ms: f64,
    #[prop_or(StaggerFrom::First)]
    pub stagger_from: StaggerFrom,
    #[prop_or(SplitBy::Characters)]
    pub split_by: SplitBy,
    #[prop_or(true)]
    pub looping: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(RotatingText)]
pub fn rotating_text(props: &RotatingTextProps) -> Html {
    let len = props.texts.len();
    let looping = props.looping;
    let rotation = use_reducer(move || Rotation { index: 0, len, looping });

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |(interval_ms, len)| {
                let interval = (*len > 1).then(|| Interval::new(*interval_ms, move || dispatcher.dispatch(())));
                move || drop(interval)
            },
            (props.interval_ms, len),
        );
    }

    let Some(text) = props.texts.get(rotation.index).copied() else {
        return html! {};
    };
    let segments = split_text(text, props.split_by);
    let total: usize = segments.iter().map(|segment| segment.parts.len()).sum();
    let mut position = 0;

    html! {
        <span class={classes!("rotating-text", props.class.clone())}>
            <style>
                {r#"
                    .rotating-text {
                        display: inline-flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        white-space: pre-wrap;
                    }
                    .rotating-segment {
                        display: inline-flex;
                        overflow: hidden;
                    }
                    .rotating-part {
                        display: inline-block;
                        animation: rotate-in 0.5s cubic-bezier(0.22, 1, 0.36, 1) both;
                    }
                    @keyframes rotate-in {
                        from { transform: translateY(100%); opacity: 0; filter: blur(10px); }
                        to { transform: translateY(0); opacity: 1; filter: blur(0); }
                    }
                    .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                    }
                "#}
            </style>
            <span class="sr-only">{text}</span>
            <span key={rotation.index} class="rotating-words" aria-hidden="true">
                { for segments.iter().map(|segment| html! {
                    <span class="rotating-segment">
                        { for segment.parts.iter().map(|part| {
                            let delay = stagger_delay(position, total, props.stagger_from, props.stagger_ms);
                            position += 1;
                            html! {
                                <span class="rotating-part" style={format!("animation-delay: {:.0}ms;", delay)}>
                                    {part.clone()}
                                </span>
                            }
                        }) }
                        if segment.needs_space {
                            <span>{" "}</span>
                        }
                    </span>
                }) }
            </span>
        </span>
    }
}
