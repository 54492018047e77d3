use yew::prelude::*;

use crate::components::contact_form::ContactFormView;
use crate::components::faq::{Faq, FaqEntry};
use crate::components::footer::Footer;
use crate::components::reveal::Reveal;
use crate::components::scrolly_demo::ScrollyDemo;
use crate::components::whatsapp_fab::WhatsAppFab;

fn faq_items() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Devo cambiare numero WhatsApp?",
            answer: "No. Synkris lavora sul numero WhatsApp Business che le tue clienti conoscono già.",
        },
        FaqEntry {
            question: "Funziona con la mia agenda?",
            answer: "Ci colleghiamo ai gestionali più diffusi per saloni e a Google Calendar. Se usi un'agenda di carta, ti aiutiamo a passare al digitale.",
        },
        FaqEntry {
            question: "E se una cliente vuole parlare con una persona?",
            answer: "Basta scriverlo: Synkris passa la conversazione al salone e ti avvisa subito.",
        },
        FaqEntry {
            question: "Quanto tempo serve per partire?",
            answer: "In genere meno di una settimana, configurazione e prova insieme a te incluse.",
        },
    ]
}

const BENEFITS: [(&str, &str); 3] = [
    ("Prenotazioni anche a salone chiuso", "Le richieste della sera e del weekend diventano appuntamenti, non messaggi da recuperare il lunedì."),
    ("Meno appuntamenti saltati", "Promemoria automatici e conferme in chat riducono i buchi in agenda."),
    ("Il telefono smette di squillare", "Tu e il tuo staff restate concentrati sulle clienti in poltrona."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <main id="main" class="landing">
                <section id="top" class="hero">
                    <div class="hero__content">
                        <p class="hero__eyebrow">{"Assistente WhatsApp per saloni"}</p>
                        <h1 class="hero__title">{"La tua agenda si riempie, anche quando non rispondi."}</h1>
                        <p class="hero__subtitle">
                            {"Synkris risponde alle clienti su WhatsApp, propone gli orari liberi e fissa gli appuntamenti al posto tuo."}
                        </p>
                        <div class="hero__actions">
                            <a href="#contatti" class="btn btn--primary">{"Richiedi una demo"}</a>
                            <a href="#come-funziona" class="btn btn--ghost">{"Guarda come funziona"}</a>
                        </div>
                    </div>
                </section>

                <ScrollyDemo />

                <section id="vantaggi" class="benefits">
                    <Reveal class={classes!("section-head")}>
                        <h2>{"Perché i saloni scelgono Synkris"}</h2>
                    </Reveal>
                    <div class="benefits__grid">
                        { for BENEFITS.iter().map(|(title, body)| html! {
                            <Reveal class={classes!("benefit-card")}>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section id="faq" class="faq">
                    <Reveal class={classes!("section-head")}>
                        <h2>{"Domande frequenti"}</h2>
                    </Reveal>
                    <Faq items={faq_items()} />
                </section>

                <section id="contatti" class="contact">
                    <Reveal class={classes!("section-head")}>
                        <h2>{"Parliamone"}</h2>
                        <p>{"Lasciaci i tuoi dati: ti richiamiamo per una demo sul tuo salone."}</p>
                    </Reveal>
                    <ContactFormView />
                </section>
            </main>
            <Footer />
            <WhatsAppFab />
            <style>
                {r#"
                :root {
                    --violet: #7c3aed;
                    --violet-soft: #a78bfa;
                    --success: #16a34a;
                    --error: #dc2626;
                }
                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.25s ease, box-shadow 0.25s ease;
                }
                .header.is-scrolled {
                    background: rgba(255, 255, 255, 0.94);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                }
                .skip-link {
                    position: absolute;
                    left: -999px;
                }
                .skip-link:focus {
                    left: 1rem;
                    top: 1rem;
                }
                .site-nav__link.is-active {
                    color: var(--violet);
                }
                .nav-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.2s ease;
                }
                .nav-overlay.is-visible {
                    opacity: 1;
                    pointer-events: auto;
                }
                @media (max-width: 979px) {
                    .site-nav {
                        position: fixed;
                        top: 0;
                        right: 0;
                        height: 100vh;
                        width: min(80vw, 320px);
                        transform: translateX(100%);
                        transition: transform 0.25s ease;
                    }
                    .site-nav.is-open {
                        transform: translateX(0);
                    }
                }
                section[id] {
                    scroll-margin-top: var(--header-h, 84px);
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(16px);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }
                .reveal.is-visible {
                    opacity: 1;
                    transform: none;
                }
                .faq-item__answer[hidden] {
                    display: none;
                }
                .form-field__error {
                    display: none;
                    color: var(--error);
                    font-size: 0.85rem;
                }
                .form-field.is-invalid .form-field__error {
                    display: block;
                }
                .form-field.is-invalid input,
                .form-field.is-invalid textarea {
                    border-color: var(--error);
                }
                .form-status.is-success {
                    color: var(--success);
                }
                .form-status.is-error {
                    color: var(--error);
                }
                .wa-fab {
                    position: fixed;
                    right: 1.25rem;
                    bottom: 1.25rem;
                    opacity: 0;
                    transform: translateY(12px);
                    pointer-events: none;
                    transition: opacity 0.25s ease, transform 0.25s ease;
                }
                .wa-fab.is-visible {
                    opacity: 1;
                    transform: none;
                    pointer-events: auto;
                }
                .scrolly {
                    padding-bottom: var(--scrolly-exit-pad, 420px);
                }
                .scrolly__sticky {
                    position: sticky;
                    top: var(--header-h, 84px);
                }
                .scrolly__device--phone {
                    width: calc(var(--device-w, 375px) * var(--device-scale, 1));
                    height: calc(var(--device-h, 812px) * var(--device-scale, 1));
                }
                .synkris-device {
                    transform: scale(var(--device-scale, 1));
                    transform-origin: top left;
                }
                .scrolly__chat {
                    overflow-y: auto;
                }
                .scrolly-msg {
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .scrolly-msg.is-enter {
                    opacity: 0;
                    transform: translateY(8px);
                }
                .scrolly-step.is-active {
                    border-color: var(--violet);
                }
                .scrolly-toast {
                    opacity: 0;
                    transform: translateY(-8px);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .scrolly-toast.is-visible {
                    opacity: 1;
                    transform: none;
                }
                .scrolly-sentinel {
                    height: 60vh;
                }
                .scrolly.is-ending .scrolly__tabs {
                    position: static;
                }
                @media (prefers-reduced-motion: reduce) {
                    .reveal,
                    .scrolly-msg,
                    .scrolly-toast {
                        transition: none;
                    }
                }
                "#}
            </style>
        </>
    }
}
