use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Opening an item closes the others; clicking the open one closes it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub items: Vec<FaqEntry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(i, item)| {
                let is_open = *open == Some(i);
                let toggle = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggle_open(*open, i));
                    })
                };
                let answer_id = format!("faq-answer-{}", i);
                html! {
                    <div class={classes!("faq-item", is_open.then(|| "is-open"))}>
                        <button
                            class="faq-item__question"
                            aria-expanded={is_open.to_string()}
                            aria-controls={answer_id.clone()}
                            onclick={toggle}
                        >
                            <span>{item.question}</span>
                            <span class="faq-item__icon" aria-hidden="true">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        <div id={answer_id} class="faq-item__answer" hidden={!is_open}>
                            <p>{item.answer}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_item_stays_open() {
        let open = toggle_open(None, 1);
        assert_eq!(open, Some(1));
        let open = toggle_open(open, 3);
        assert_eq!(open, Some(3));
        assert_eq!(toggle_open(open, 3), None);
    }
}
