//! Gallery slider for the case-study hero.

use std::rc::Rc;

use portfolio_core::{SlideView, SliderState, SwipeDirection, slide_message};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::announcer::use_announcer;
use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderAction {
    Step(SwipeDirection),
    GoTo(usize),
    /// New slides arrived: back to the first of `total`.
    Reset(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SliderModel {
    state: Option<SliderState>,
}

impl Reducible for SliderModel {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let SliderAction::Reset(total) = action {
            let fresh = SliderState::new(total).ok();
            if self.state == fresh {
                return self;
            }
            return Rc::new(Self { state: fresh });
        }
        let Some(mut state) = self.state else {
            return self;
        };
        match action {
            SliderAction::Step(direction) => state.apply(direction),
            SliderAction::GoTo(index) => {
                if !state.go_to(index) {
                    return self;
                }
            }
            SliderAction::Reset(_) => return self,
        }
        Rc::new(Self { state: Some(state) })
    }
}

fn touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .changed_touches()
        .get(0)
        .map(|touch| f64::from(touch.screen_x()))
}

#[derive(Properties, PartialEq)]
pub struct ImageSliderProps {
    pub slides: Vec<SlideView>,
}

/// Slides with prev/next buttons, dots, arrow keys and swipe.
///
/// Renders nothing for an empty gallery.
#[function_component(ImageSlider)]
pub fn image_slider(props: &ImageSliderProps) -> Html {
    let total = props.slides.len();
    let model = use_reducer(|| SliderModel {
        state: SliderState::new(total).ok(),
    });
    let announcer = use_announcer();
    let touch_start = use_mut_ref(|| 0.0_f64);

    {
        let dispatcher = model.dispatcher();
        use_effect_with(props.slides.clone(), move |slides| {
            dispatcher.dispatch(SliderAction::Reset(slides.len()));
            || {}
        });
    }

    {
        let dispatcher = model.dispatcher();
        use_effect_with(total, move |total| {
            let document = (*total > 0).then(dom::document).flatten();
            let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                if let Some(direction) = SwipeDirection::from_key(&event.key()) {
                    dispatcher.dispatch(SliderAction::Step(direction));
                }
            });
            if let Some(doc) = &document {
                let _ = doc.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
            }
            move || {
                if let Some(doc) = document {
                    let _ = doc
                        .remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
                }
            }
        });
    }

    {
        let current = model.state.map(|state| state.current());
        let slides = props.slides.clone();
        use_effect_with(current, move |current| {
            if let Some(index) = *current
                && let Some(slide) = slides.get(index)
            {
                announcer.polite(slide_message(index, slides.len(), &slide.title));
            }
            || {}
        });
    }

    // Until the reset lands, a stale state must not index into the new slides.
    let Some(state) = model
        .state
        .filter(|state| state.total() == total)
        .or_else(|| SliderState::new(total).ok())
    else {
        return Html::default();
    };

    let step = |direction: SwipeDirection| {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(SliderAction::Step(direction)))
    };
    let ontouchstart = {
        let touch_start = touch_start.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(x) = touch_x(&event) {
                *touch_start.borrow_mut() = x;
            }
        })
    };
    let ontouchend = {
        let dispatcher = model.dispatcher();
        Callback::from(move |event: TouchEvent| {
            let Some(end) = touch_x(&event) else {
                return;
            };
            if let Some(direction) = SwipeDirection::classify(*touch_start.borrow(), end) {
                dispatcher.dispatch(SliderAction::Step(direction));
            }
        })
    };

    let slides = props.slides.iter().enumerate().map(|(index, slide)| {
        let position = state.position(index).class();
        let hidden = index != state.current();
        html! {
            <div
                class={classes!("slide", (!position.is_empty()).then_some(position))}
                aria-hidden={hidden.to_string()}
            >
                <img src={slide.image.clone()} alt={slide.title.clone()} class="slide-image" />
                <div class="slide-text">
                    <h3>{ slide.title.clone() }</h3>
                    <p>{ slide.description.clone() }</p>
                </div>
            </div>
        }
    });

    let dots = (0..total).map(|index| {
        let active = index == state.current();
        let onclick = {
            let dispatcher = model.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(SliderAction::GoTo(index)))
        };
        html! {
            <button
                type="button"
                class={classes!("dot", active.then_some("active"))}
                aria-current={active.to_string()}
                aria-label={format!("Go to slide {}", index + 1)}
                {onclick}
            ></button>
        }
    });

    html! {
        <div class="image-slider" data-animate="" aria-roledescription="carousel">
            <div class="slider-wrapper">
                <div class="slider-content" {ontouchstart} {ontouchend}>
                    { for slides }
                </div>
            </div>
            <button type="button" class="slider-btn prev" aria-label="Previous slide"
                    onclick={step(SwipeDirection::Previous)}>
                <i class="bi bi-chevron-left" aria-hidden="true"></i>
            </button>
            <button type="button" class="slider-btn next" aria-label="Next slide"
                    onclick={step(SwipeDirection::Next)}>
                <i class="bi bi-chevron-right" aria-hidden="true"></i>
            </button>
            <div class="slider-dots">
                { for dots }
            </div>
        </div>
    }
}
