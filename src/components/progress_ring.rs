use crate::animation::{Animator, RingGeometry, RingSize};
use gloo::render::{request_animation_frame, AnimationFrame};
use std::sync::atomic::{AtomicU64, Ordering};
use yew::prelude::*;

// Instance counter so concurrent rings get distinct SVG gradient ids.
static NEXT_RING_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Properties, PartialEq)]
pub struct ProgressRingProps {
    /// Target fill percentage. Values outside [0, 100] are clamped.
    #[prop_or(75.0)]
    pub percentage: f64,
    /// Size preset name: "compact", "standard" or "large". Unrecognized
    /// names render as "standard".
    #[prop_or(AttrValue::Static("standard"))]
    pub size: AttrValue,
}

pub enum Msg {
    Frame { token: u64, now: f64 },
    HoverStart,
    HoverEnd,
}

/// Circular progress ring that eases from its current value to the target
/// percentage over two seconds, with a cosmetic hover glow.
pub struct ProgressRing {
    animator: Animator,
    hovered: bool,
    gradient_id: String,
    // Pending frame request; dropping it cancels the callback.
    frame: Option<AnimationFrame>,
}

impl ProgressRing {
    fn schedule_frame(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let token = self.animator.token();
        self.frame = Some(request_animation_frame(move |now| {
            link.send_message(Msg::Frame { token, now });
        }));
    }
}

impl Component for ProgressRing {
    type Message = Msg;
    type Properties = ProgressRingProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut ring = Self {
            animator: Animator::new(now_ms(), ctx.props().percentage),
            hovered: false,
            gradient_id: format!(
                "ring-gradient-{}",
                NEXT_RING_ID.fetch_add(1, Ordering::Relaxed)
            ),
            frame: None,
        };
        ring.schedule_frame(ctx);
        ring
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Frame { token, now } => {
                // Ticks from a superseded run are dropped by the animator.
                let Some(sample) = self.animator.tick(token, now) else {
                    return false;
                };
                if sample.finished {
                    self.frame = None;
                } else {
                    self.schedule_frame(ctx);
                }
                true
            }
            Msg::HoverStart => {
                self.hovered = true;
                true
            }
            Msg::HoverEnd => {
                self.hovered = false;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // No restart when the new percentage clamps to the target already
        // in flight.
        let target = ctx.props().percentage.clamp(0.0, 100.0);
        if target != self.animator.target() {
            self.animator.retarget(now_ms(), target);
            self.schedule_frame(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let geometry = RingGeometry::of(RingSize::from_name(&ctx.props().size));
        let progress = self.animator.value();
        let dash_offset = geometry.dash_offset(progress);
        let center = geometry.diameter / 2.0;

        let label_size = match RingSize::from_name(&ctx.props().size) {
            RingSize::Compact => "ring-label-compact",
            RingSize::Standard => "ring-label-standard",
            RingSize::Large => "ring-label-large",
        };

        html! {
            <div
                class={classes!("progress-ring", self.hovered.then_some("hovered"))}
                onmouseenter={ctx.link().callback(|_| Msg::HoverStart)}
                onmouseleave={ctx.link().callback(|_| Msg::HoverEnd)}
            >
                <div class="ring-glow"></div>
                <svg
                    class="ring-svg"
                    width={geometry.diameter.to_string()}
                    height={geometry.diameter.to_string()}
                >
                    <defs>
                        <linearGradient id={self.gradient_id.clone()} x1="0%" y1="0%" x2="100%" y2="0%">
                            <stop offset="0%" stop-color="#3B82F6" />
                            <stop offset="50%" stop-color="#6366F1" />
                            <stop offset="100%" stop-color="#8B5CF6" />
                        </linearGradient>
                    </defs>
                    <circle
                        class="ring-track"
                        stroke="currentColor"
                        fill="none"
                        stroke-width={geometry.stroke_width.to_string()}
                        r={geometry.radius.to_string()}
                        cx={center.to_string()}
                        cy={center.to_string()}
                    />
                    <circle
                        class="ring-fill"
                        stroke={format!("url(#{})", self.gradient_id)}
                        fill="none"
                        stroke-linecap="round"
                        stroke-width={geometry.stroke_width.to_string()}
                        stroke-dasharray={geometry.circumference.to_string()}
                        stroke-dashoffset={dash_offset.to_string()}
                        r={geometry.radius.to_string()}
                        cx={center.to_string()}
                        cy={center.to_string()}
                    />
                </svg>
                <div class="ring-label">
                    <span class={classes!("ring-value", label_size)}>
                        { format!("{}%", progress.round()) }
                    </span>
                </div>
            </div>
        }
    }
}

/// Milliseconds on the same timebase as animation-frame timestamps.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(props: ProgressRingProps) -> (yew::AppHandle<ProgressRing>, web_sys::Element) {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let handle =
            yew::Renderer::<ProgressRing>::with_root_and_props(root.clone(), props).render();
        (handle, root)
    }

    #[wasm_bindgen_test]
    fn mounts_and_unmounts_mid_animation() {
        let (handle, _root) = mount(ProgressRingProps {
            percentage: 60.0,
            size: AttrValue::Static("compact"),
        });
        // Tearing down while the first run is still in flight must not leave
        // a live callback behind.
        handle.destroy();
    }

    #[wasm_bindgen_test]
    fn unknown_size_still_renders() {
        let (handle, _root) = mount(ProgressRingProps {
            percentage: 30.0,
            size: AttrValue::Static("gigantic"),
        });
        handle.destroy();
    }

    #[wasm_bindgen_test]
    fn hover_toggles_styling_but_not_the_ring_fill() {
        let (handle, root) = mount(ProgressRingProps {
            percentage: 0.0,
            size: AttrValue::Static("standard"),
        });
        let ring = root.query_selector(".progress-ring").unwrap().unwrap();
        let fill = root.query_selector(".ring-fill").unwrap().unwrap();
        let offset_before = fill.get_attribute("stroke-dashoffset").unwrap();

        let enter = web_sys::MouseEvent::new("mouseenter").unwrap();
        ring.dispatch_event(&enter).unwrap();
        assert!(ring.class_list().contains("hovered"));
        assert_eq!(fill.get_attribute("stroke-dashoffset").unwrap(), offset_before);

        let leave = web_sys::MouseEvent::new("mouseleave").unwrap();
        ring.dispatch_event(&leave).unwrap();
        assert!(!ring.class_list().contains("hovered"));
        assert_eq!(fill.get_attribute("stroke-dashoffset").unwrap(), offset_before);

        handle.destroy();
    }

    #[wasm_bindgen_test]
    fn concurrent_rings_use_distinct_gradient_ids() {
        let (first_handle, first_root) = mount(ProgressRingProps {
            percentage: 40.0,
            size: AttrValue::Static("compact"),
        });
        let (second_handle, second_root) = mount(ProgressRingProps {
            percentage: 80.0,
            size: AttrValue::Static("large"),
        });

        let gradient_id = |root: &web_sys::Element| {
            root.query_selector("linearGradient")
                .unwrap()
                .unwrap()
                .get_attribute("id")
                .unwrap()
        };
        let first_id = gradient_id(&first_root);
        assert_ne!(first_id, gradient_id(&second_root));

        // The fill stroke must reference this instance's own gradient.
        let fill = first_root.query_selector(".ring-fill").unwrap().unwrap();
        assert_eq!(
            fill.get_attribute("stroke").unwrap(),
            format!("url(#{})", first_id)
        );

        first_handle.destroy();
        second_handle.destroy();
    }
}
