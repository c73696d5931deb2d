//! The card page.
//!
//! Owns the modal state ([`CardShell`]), binds the contact actions once per
//! render, and routes every action's result into the feedback channel.

use bizcard_core::{bind_actions, BoundAction, CardShell, ShareDispatcher, ShareRequest};
use dioxus::prelude::*;

use crate::components::{
    ContactActions, FeedbackToast, Gallery, GalleryModal, Hero, Insights, ProfileLightbox,
    SharePrompt,
};
use crate::context::{use_card, use_feedback};
use crate::platform::{save_vcard, DesktopSharePlatform, SystemBrowser};

#[component]
pub fn CardPage() -> Element {
    let card = use_card();
    let feedback = use_feedback();
    let mut shell = use_signal(CardShell::new);
    let mut manual_copy = use_signal(|| Option::<String>::None);
    let dispatcher = use_hook(|| ShareDispatcher::new(DesktopSharePlatform::detect(manual_copy)));

    let actions = bind_actions(&card.contact);

    let on_action = {
        let feedback = feedback.clone();
        move |action: BoundAction| {
            tracing::info!(key = ?action.key, "Contact action");
            let feedback = feedback.clone();
            spawn(async move {
                match tokio::task::spawn_blocking(move || action.follow(&SystemBrowser, &feedback))
                    .await
                {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::warn!("Failed to open contact link: {}", e),
                    Err(e) => tracing::warn!("Contact link task failed: {}", e),
                }
            });
        }
    };

    let on_download = {
        let card = card.clone();
        let feedback = feedback.clone();
        move |_: ()| {
            let fields = card.vcard.clone();
            let message = card.contact.feedback.download.clone();
            let feedback = feedback.clone();
            spawn(async move {
                match save_vcard(fields).await {
                    Ok(Some(path)) => {
                        tracing::info!("vCard saved to {}", path.display());
                        feedback.show(message);
                    }
                    Ok(None) => tracing::debug!("vCard save cancelled"),
                    Err(e) => tracing::warn!("Failed to save vCard: {:#}", e),
                }
            });
        }
    };

    let on_share = {
        let card = card.clone();
        let feedback = feedback.clone();
        move |_: ()| {
            let request = ShareRequest::from(&card.contact.share_metadata);
            let texts = card.contact.feedback.clone();
            let feedback = feedback.clone();
            let dispatcher = dispatcher.clone();
            spawn(async move {
                let outcome = dispatcher.share(&request).await;
                tracing::info!(?outcome, "Share finished");
                if let Some(message) = outcome.feedback(&texts) {
                    feedback.show(message);
                }
            });
        }
    };

    let profile = card.assets.profile_image.clone();
    let background = format!("background-image: url('{}');", card.assets.background_image);

    rsx! {
        div { class: "page", style: "{background}",
            div { class: "page__scrim" }

            FeedbackToast {}

            div { class: "page__container",
                div { class: "card",
                    div { class: "card__strip",
                        img {
                            class: "card__avatar",
                            src: "{profile.src}",
                            alt: "{profile.alt}",
                            onclick: move |_| shell.write().open_profile(),
                        }
                        div {
                            p { class: "eyebrow eyebrow--light", "{card.hero.badge}" }
                            p { class: "card__strip-name", "{card.hero.name}" }
                        }
                    }

                    div { class: "card__content",
                        div { class: "card__grid",
                            section { class: "card__main",
                                Hero { data: card.hero.clone() }
                                ContactActions {
                                    actions: actions,
                                    section_label: card.contact.section_label.clone(),
                                    quick_actions: card.contact.quick_actions.clone(),
                                    on_action: on_action,
                                    on_download: on_download,
                                    on_share: on_share,
                                }
                            }
                            aside { class: "card__aside",
                                Gallery {
                                    on_image_click: move |index: usize| {
                                        tracing::debug!(index, "Opening gallery modal");
                                        shell.write().open_gallery(index);
                                    },
                                }
                                Insights {
                                    data: card.insights.clone(),
                                    logo_image: card.assets.logo_image.clone(),
                                }
                            }
                        }
                    }

                    div { class: "card__closing",
                        img {
                            src: "{card.closing.image.src}",
                            alt: "{card.closing.image.alt}",
                            "loading": "lazy",
                        }
                    }
                }
            }

            if shell.read().gallery_open() {
                GalleryModal {
                    initial_index: shell.read().gallery_seed(),
                    on_close: move |_| shell.write().close_gallery(),
                }
            }

            if shell.read().profile_open() {
                ProfileLightbox {
                    image: card.assets.profile_image.clone(),
                    on_close: move |_| shell.write().close_profile(),
                }
            }

            if let Some(url) = manual_copy() {
                SharePrompt {
                    url: url,
                    on_close: move |_| manual_copy.set(None),
                }
            }
        }
    }
}
