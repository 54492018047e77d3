use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use crate::anchors::scroll_behavior;
use crate::dom;
use crate::motion::Motion;
use crate::scrolly::geometry::{CandidateRegion, FocusLine};
use crate::scrolly::layout;
use crate::scrolly::projection::{MessageSpec, Projection, Projector};
use crate::scrolly::router::{ActivationRouter, Dispatch, Effect};

struct DemoStep {
    title: &'static str,
    body: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
enum Sender {
    Client,
    Assistant,
}

struct ChatMessage {
    sender: Sender,
    text: &'static str,
    show_from: usize,
}

const STEPS: [DemoStep; 4] = [
    DemoStep {
        title: "La cliente scrive",
        body: "Alle 22:40 una cliente chiede un appuntamento su WhatsApp. Il salone è chiuso, Synkris no.",
    },
    DemoStep {
        title: "Synkris propone gli orari",
        body: "L'assistente legge l'agenda e propone solo gli slot davvero liberi, con il servizio giusto.",
    },
    DemoStep {
        title: "Appuntamento in agenda",
        body: "La conferma arriva in chat e la prenotazione finisce direttamente nel calendario del salone.",
    },
    DemoStep {
        title: "Promemoria automatico",
        body: "Il giorno prima parte il promemoria. Meno buchi in agenda, zero telefonate.",
    },
];

const MESSAGES: [ChatMessage; 6] = [
    ChatMessage {
        sender: Sender::Client,
        text: "Ciao! Avete posto sabato mattina per una piega?",
        show_from: 0,
    },
    ChatMessage {
        sender: Sender::Assistant,
        text: "Ciao Martina! Sabato ho libero alle 9:30 o alle 10:30. Quale preferisci?",
        show_from: 1,
    },
    ChatMessage {
        sender: Sender::Client,
        text: "10:30 perfetto 🙌",
        show_from: 1,
    },
    ChatMessage {
        sender: Sender::Assistant,
        text: "Fatto! Ti ho prenotata sabato alle 10:30 con Sara.",
        show_from: 2,
    },
    ChatMessage {
        sender: Sender::Assistant,
        text: "Promemoria: domani alle 10:30 ti aspettiamo in salone ✂️",
        show_from: 3,
    },
    ChatMessage {
        sender: Sender::Client,
        text: "Grazie, a domani!",
        show_from: 3,
    },
];

fn tab_id(index: usize) -> String {
    format!("scrolly-tab-{}", index)
}

pub enum Msg {
    Activate(usize),
    Step(isize),
    TabKey(usize, String),
    Scrolled,
    Resized,
    SyncLayout,
    Sample,
    EnterTick,
}

pub struct ScrollyDemo {
    router: Option<ActivationRouter>,
    projection: Option<Projection>,
    reduced_motion: bool,
    compact: bool,
    ending: bool,
    entering: Vec<usize>,
    enter_ticks: u8,
    pending_effects: Vec<Effect>,

    section_ref: NodeRef,
    panel_ref: NodeRef,
    stage_ref: NodeRef,
    phone_ref: NodeRef,
    device_ref: NodeRef,
    tab_refs: Vec<NodeRef>,
    sentinel_refs: Vec<NodeRef>,

    sample_frame: Option<AnimationFrame>,
    enter_frame: Option<AnimationFrame>,
    layout_frame: Option<AnimationFrame>,
    listeners: Vec<(&'static str, Closure<dyn Fn()>)>,
}

impl ScrollyDemo {
    fn apply(&mut self, dispatch: Dispatch) {
        if !self.reduced_motion {
            let before = self.projection.as_ref().map(|p| p.messages.clone());
            let revealed: Vec<usize> = dispatch
                .projection
                .messages
                .iter()
                .enumerate()
                .filter(|(i, visible)| {
                    **visible
                        && !before
                            .as_ref()
                            .and_then(|b| b.get(*i).copied())
                            .unwrap_or(false)
                })
                .map(|(i, _)| i)
                .collect();
            if !revealed.is_empty() {
                self.entering = revealed;
                self.enter_ticks = 0;
                self.enter_frame = None;
            }
        }

        self.projection = Some(dispatch.projection);
        self.pending_effects.extend(dispatch.effects);
    }

    fn schedule_frame(ctx: &Context<Self>, msg: fn() -> Msg) -> AnimationFrame {
        let link = ctx.link().clone();
        request_animation_frame(move |_| link.send_message(msg()))
    }

    fn request_sample(&mut self, ctx: &Context<Self>) {
        if let Some(router) = self.router.as_mut() {
            if router.request_sample() {
                self.sample_frame = Some(Self::schedule_frame(ctx, || Msg::Sample));
            }
        }
    }

    /// Sentinels stand in for the tabs on compact layouts.
    fn candidates(&self) -> Vec<CandidateRegion> {
        let sentinel_steps = layout::sentinel_steps(STEPS.len());
        let use_sentinels =
            self.compact && self.sentinel_refs.iter().any(|r| r.get().is_some());

        let regions: Vec<(usize, Element)> = if use_sentinels {
            self.sentinel_refs
                .iter()
                .zip(sentinel_steps)
                .filter_map(|(r, step)| r.cast::<Element>().map(|el| (step, el)))
                .collect()
        } else {
            self.tab_refs
                .iter()
                .enumerate()
                .filter_map(|(i, r)| r.cast::<Element>().map(|el| (i, el)))
                .collect()
        };

        regions
            .into_iter()
            .map(|(id, el)| {
                let rect = el.get_bounding_client_rect();
                CandidateRegion::new(id, rect.top(), rect.bottom())
            })
            .collect()
    }

    fn region_for_step(&self, index: usize) -> Option<Element> {
        if self.compact {
            if let Some(el) = self.sentinel_refs.get(index).and_then(|r| r.cast::<Element>()) {
                return Some(el);
            }
        }
        self.tab_refs.get(index).and_then(|r| r.cast::<Element>())
    }

    fn run_effects(&mut self) {
        let behavior = scroll_behavior(self.reduced_motion);
        for effect in std::mem::take(&mut self.pending_effects) {
            match effect {
                Effect::ScrollRegionIntoView(index) => {
                    if let Some(el) = self.region_for_step(index) {
                        dom::scroll_into_view_centered(&el, behavior);
                    }
                }
                Effect::ScrollPanelToBottom => {
                    if let Some(panel) = self.panel_ref.cast::<Element>() {
                        dom::scroll_to_bottom(&panel, behavior);
                    }
                }
                Effect::FocusTab(index) => {
                    if let Some(tab) = self.tab_refs.get(index).and_then(|r| r.cast::<Element>()) {
                        dom::focus(&tab);
                    }
                }
            }
        }
    }

    fn sync_layout(&self) {
        let Some(section) = self.section_ref.cast::<Element>() else {
            return;
        };

        if let Some(phone) = self.phone_ref.cast::<Element>() {
            let current_scale = dom::computed_css_var(&phone, "--device-scale").unwrap_or(1.0);
            let from_css = (
                dom::computed_css_var(&phone, "--device-w").unwrap_or(layout::PHONE_BASE_WIDTH),
                dom::computed_css_var(&phone, "--device-h").unwrap_or(layout::PHONE_BASE_HEIGHT),
            );
            let (base_w, base_h) = match self.device_ref.cast::<Element>() {
                Some(device) => {
                    let rect = device.get_bounding_client_rect();
                    let dims =
                        layout::phone_base_dims(rect.width(), rect.height(), current_scale, from_css);
                    dom::set_css_var(&phone, "--device-w", &format!("{:.2}px", dims.0));
                    dom::set_css_var(&phone, "--device-h", &format!("{:.2}px", dims.1));
                    dims
                }
                None => from_css,
            };

            let stage_width = phone
                .parent_element()
                .map(|p| p.client_width() as f64)
                .unwrap_or_else(dom::inner_width);
            match layout::phone_scale(dom::inner_width(), dom::inner_height(), stage_width, base_w, base_h) {
                Some(scale) => dom::set_css_var(&phone, "--device-scale", &format!("{:.3}", scale)),
                None => dom::remove_css_var(&phone, "--device-scale"),
            }
        }

        if let Some(stage) = self.stage_ref.cast::<Element>() {
            let h = layout::stage_height(stage.get_bounding_client_rect().height());
            dom::set_css_var(&section, "--scrolly-stage-h", &format!("{}px", h));
            dom::set_css_var(&section, "--scrolly-exit-pad", &format!("{}px", layout::exit_pad(h)));
        }
    }

    fn measure_ending(&self) -> bool {
        self.section_ref
            .cast::<Element>()
            .map(|s| {
                layout::is_ending(
                    s.get_bounding_client_rect().bottom(),
                    dom::inner_height(),
                    self.compact,
                )
            })
            .unwrap_or(false)
    }

    fn listen(&mut self, ctx: &Context<Self>, event: &'static str, msg: fn() -> Msg) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let link = ctx.link().clone();
        let callback = Closure::wrap(Box::new(move || link.send_message(msg())) as Box<dyn Fn()>);
        if window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.push((event, callback));
        }
    }

    fn tabs_view(&self, ctx: &Context<Self>, projection: Option<&Projection>) -> Html {
        html! {
            <div class="scrolly__tabs" role="tablist" aria-label="Passaggi della demo">
                { for STEPS.iter().enumerate().map(|(i, step)| {
                    let tab = projection.and_then(|p| p.tabs.get(i).copied());
                    let selected = tab.map(|t| t.selected).unwrap_or(i == 0);
                    let tab_index = tab.map(|t| t.tab_index).unwrap_or(if i == 0 { 0 } else { -1 });
                    let onclick = ctx.link().callback(move |_: MouseEvent| Msg::Activate(i));
                    let onkeydown = ctx.link().batch_callback(move |e: KeyboardEvent| {
                        let key = e.key();
                        match key.as_str() {
                            "ArrowRight" | "ArrowDown" | "ArrowLeft" | "ArrowUp" | "Home" | "End"
                            | "Enter" | " " => {
                                e.prevent_default();
                                Some(Msg::TabKey(i, key))
                            }
                            _ => None,
                        }
                    });
                    html! {
                        <button
                            ref={self.tab_refs[i].clone()}
                            id={tab_id(i)}
                            type="button"
                            role="tab"
                            class={classes!("scrolly-step", selected.then(|| "is-active"))}
                            data-step={i.to_string()}
                            aria-selected={selected.to_string()}
                            aria-controls="scrolly-panel"
                            tabindex={tab_index.to_string()}
                            {onclick}
                            {onkeydown}
                        >
                            <span class="scrolly-step__num">{format!("{:02}", i + 1)}</span>
                            <span class="scrolly-step__title">{step.title}</span>
                            <span class="scrolly-step__body">{step.body}</span>
                        </button>
                    }
                }) }
            </div>
        }
    }

    fn chat_view(&self, projection: Option<&Projection>) -> Html {
        let labelled_by = tab_id(projection.map(|p| p.labelled_by).unwrap_or(0));
        let toast_visible = projection.map(|p| p.toast_visible).unwrap_or(false);

        html! {
            <div ref={self.phone_ref.clone()} class="scrolly__device scrolly__device--phone">
                <div ref={self.device_ref.clone()} class="synkris-device">
                    <div class="synkris-device__bar">
                        <span class="synkris-device__avatar">{"S"}</span>
                        <span class="synkris-device__name">{"Salone Aurora"}</span>
                    </div>
                    <div
                        ref={self.panel_ref.clone()}
                        id="scrolly-panel"
                        class="scrolly__chat"
                        role="tabpanel"
                        aria-labelledby={labelled_by}
                        aria-live="polite"
                    >
                        { for MESSAGES.iter().enumerate().map(|(i, msg)| {
                            let visible = projection
                                .and_then(|p| p.messages.get(i).copied())
                                .unwrap_or(msg.show_from == 0);
                            let entering = self.entering.contains(&i);
                            let side = match msg.sender {
                                Sender::Client => "scrolly-msg--in",
                                Sender::Assistant => "scrolly-msg--out",
                            };
                            html! {
                                <div
                                    class={classes!("scrolly-msg", side, entering.then(|| "is-enter"))}
                                    data-show-from={msg.show_from.to_string()}
                                    hidden={!visible}
                                >
                                    {msg.text}
                                </div>
                            }
                        }) }
                    </div>
                    <div
                        id="scrollyCalendarToast"
                        class={classes!("scrolly-toast", toast_visible.then(|| "is-visible"))}
                        aria-hidden={(!toast_visible).to_string()}
                    >
                        <strong>{"Nuovo appuntamento"}</strong>
                        <span>{"Sabato 10:30 · Piega · Sara"}</span>
                    </div>
                </div>
            </div>
        }
    }
}

impl Component for ScrollyDemo {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let reduced_motion = ctx
            .link()
            .context::<Motion>(Callback::noop())
            .map(|(motion, _)| motion.reduced)
            .unwrap_or(false);

        let projector = Projector::new(
            MESSAGES
                .iter()
                .map(|m| MessageSpec { show_from: m.show_from })
                .collect(),
        );
        let mut router = ActivationRouter::new(STEPS.len(), reduced_motion, projector);
        let init = router.as_mut().and_then(|r| r.init());

        let mut demo = Self {
            router,
            projection: None,
            reduced_motion,
            compact: layout::is_compact(dom::inner_width()),
            ending: false,
            entering: Vec::new(),
            enter_ticks: 0,
            pending_effects: Vec::new(),
            section_ref: NodeRef::default(),
            panel_ref: NodeRef::default(),
            stage_ref: NodeRef::default(),
            phone_ref: NodeRef::default(),
            device_ref: NodeRef::default(),
            tab_refs: STEPS.iter().map(|_| NodeRef::default()).collect(),
            sentinel_refs: layout::sentinel_steps(STEPS.len())
                .iter()
                .map(|_| NodeRef::default())
                .collect(),
            sample_frame: None,
            enter_frame: None,
            layout_frame: None,
            listeners: Vec::new(),
        };
        if let Some(init) = init {
            // The opening messages are there from the start, no entry animation.
            demo.projection = Some(init.projection);
            demo.pending_effects = init.effects;
        }
        demo
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if self.router.is_none() {
            return false;
        }

        match msg {
            Msg::Activate(index) => {
                let dispatch = self.router.as_mut().and_then(|r| r.activate(index));
                if let Some(dispatch) = dispatch {
                    self.apply(dispatch);
                }
                true
            }
            Msg::Step(delta) => {
                let dispatch = self.router.as_mut().and_then(|r| r.step(delta));
                if let Some(dispatch) = dispatch {
                    self.apply(dispatch);
                }
                true
            }
            Msg::TabKey(index, key) => {
                let focus = self.router.as_ref().and_then(|r| r.roving_key(&key, index));
                if let Some(effect) = focus {
                    self.pending_effects.push(effect);
                    self.run_effects();
                    return false;
                }
                let dispatch = self.router.as_mut().and_then(|r| r.commit_key(&key, index));
                match dispatch {
                    Some(dispatch) => {
                        self.apply(dispatch);
                        true
                    }
                    None => false,
                }
            }
            Msg::Scrolled => {
                let ending = self.measure_ending();
                self.request_sample(ctx);
                if ending != self.ending {
                    self.ending = ending;
                    return true;
                }
                false
            }
            Msg::Resized => {
                let compact = layout::is_compact(dom::inner_width());
                let changed = compact != self.compact;
                self.compact = compact;
                self.ending = self.measure_ending();
                // A newer resize replaces (and cancels) the pending layout pass.
                self.layout_frame = Some(Self::schedule_frame(ctx, || Msg::SyncLayout));
                self.request_sample(ctx);
                changed
            }
            Msg::SyncLayout => {
                self.layout_frame = None;
                self.sync_layout();
                false
            }
            Msg::Sample => {
                self.sample_frame = None;
                let section_visible = self
                    .section_ref
                    .cast::<Element>()
                    .map(|s| {
                        let r = s.get_bounding_client_rect();
                        !(r.bottom() < 0.0 || r.top() > dom::inner_height())
                    })
                    .unwrap_or(false);
                let viewport_height = dom::inner_height();
                let focus_y = FocusLine::for_width(dom::inner_width()).focus_y(viewport_height);
                let candidates = self.candidates();

                let dispatch = self.router.as_mut().and_then(|r| {
                    r.run_sample(section_visible, &candidates, focus_y, viewport_height)
                });
                match dispatch {
                    Some(dispatch) => {
                        self.apply(dispatch);
                        true
                    }
                    None => false,
                }
            }
            Msg::EnterTick => {
                if self.entering.is_empty() {
                    self.enter_frame = None;
                    return false;
                }
                // `is-enter` has to survive two frames for the transition to start.
                self.enter_ticks += 1;
                if self.enter_ticks < 2 {
                    self.enter_frame = Some(Self::schedule_frame(ctx, || Msg::EnterTick));
                    return false;
                }
                self.entering.clear();
                self.enter_ticks = 0;
                self.enter_frame = None;
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.router.is_some() {
            self.sync_layout();
            self.ending = self.measure_ending();
            self.layout_frame = Some(Self::schedule_frame(ctx, || Msg::SyncLayout));

            self.listen(ctx, "scroll", || Msg::Scrolled);
            self.listen(ctx, "resize", || Msg::Resized);

            // Arriving through an anchor: pick the right step straight away.
            self.request_sample(ctx);
        }

        if !self.entering.is_empty() && self.enter_frame.is_none() && self.enter_ticks == 0 {
            self.enter_frame = Some(Self::schedule_frame(ctx, || Msg::EnterTick));
        }

        self.run_effects();
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(window) = web_sys::window() {
            for (event, callback) in self.listeners.drain(..) {
                let _ = window
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let projection = self.projection.as_ref();
        let label = projection
            .map(|p| p.label.clone())
            .unwrap_or_else(|| format!("1/{} step", STEPS.len()));
        let prev_disabled = projection.map(|p| p.prev_disabled).unwrap_or(true);
        let next_disabled = projection.map(|p| p.next_disabled).unwrap_or(true);

        let on_prev = ctx.link().callback(|_: MouseEvent| Msg::Step(-1));
        let on_next = ctx.link().callback(|_: MouseEvent| Msg::Step(1));

        let sentinels = if self.compact {
            html! {
                { for layout::sentinel_steps(STEPS.len()).into_iter().enumerate().map(|(i, step)| {
                    let tail = i == STEPS.len();
                    html! {
                        <div
                            ref={self.sentinel_refs[i].clone()}
                            class={classes!("scrolly-sentinel", tail.then(|| "scrolly-sentinel--tail"))}
                            data-step={step.to_string()}
                            aria-hidden="true"
                        ></div>
                    }
                }) }
            }
        } else {
            html! {}
        };

        html! {
            <section
                ref={self.section_ref.clone()}
                id="come-funziona"
                class={classes!("scrolly", self.ending.then(|| "is-ending"))}
                data-scrolly=""
            >
                <div class="scrolly__intro">
                    <h2>{"Come funziona"}</h2>
                    <p>{"Scorri e guarda una prenotazione vera, dal primo messaggio al promemoria."}</p>
                </div>
                <div class="scrolly__layout">
                    <div ref={self.stage_ref.clone()} class="scrolly__sticky">
                        { self.chat_view(projection) }
                        <div class="scrolly__controls" data-scrolly-controls="">
                            <button
                                type="button"
                                class="scrolly__btn"
                                data-scrolly-action="prev"
                                disabled={prev_disabled}
                                aria-label="Passaggio precedente"
                                onclick={on_prev}
                            >{"←"}</button>
                            <span id="scrollyStepLabel" class="scrolly__label" aria-live="polite">{label}</span>
                            <button
                                type="button"
                                class="scrolly__btn"
                                data-scrolly-action="next"
                                disabled={next_disabled}
                                aria-label="Passaggio successivo"
                                onclick={on_next}
                            >{"→"}</button>
                        </div>
                    </div>
                    <div class="scrolly__scroll">
                        { self.tabs_view(ctx, projection) }
                        { sentinels }
                    </div>
                </div>
            </section>
        }
    }
}
