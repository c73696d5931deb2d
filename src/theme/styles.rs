//! Global CSS styles for the business card.
//!
//! White content panels on a darkened photo background, primary red accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --primary: #c8102e;
  --primary-soft: rgba(200, 16, 46, 0.1);

  /* NEUTRALS */
  --ink: #111111;
  --paper: #ffffff;
  --muted: #525252;
  --line: rgba(0, 0, 0, 0.1);
  --scrim: rgba(0, 0, 0, 0.8);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Radii */
  --radius-md: 1rem;
  --radius-lg: 1.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-fade: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  color: var(--ink);
  background: var(--ink);
  line-height: 1.5;
}

button {
  font: inherit;
  cursor: pointer;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}

/* === Icons === */
.icon { width: 1.25rem; height: 1.25rem; flex-shrink: 0; }
.icon--xs { width: 0.875rem; height: 0.875rem; }
.icon--sm { width: 1rem; height: 1rem; }
.icon--lg { width: 1.5rem; height: 1.5rem; }
.icon--primary { color: var(--primary); }

/* === Page === */
.page {
  position: relative;
  min-height: 100vh;
  width: 100%;
  background-size: cover;
  background-position: center;
  background-attachment: fixed;
}

.page__scrim {
  position: absolute;
  inset: 0;
  background: var(--scrim);
}

.page__container {
  position: relative;
  max-width: 72rem;
  margin: 0 auto;
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding: 3rem 1rem;
}

.eyebrow {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.3em;
  color: var(--muted);
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.eyebrow--light { color: rgba(255, 255, 255, 0.7); }
.eyebrow--primary { color: var(--primary); font-weight: 600; }

/* === Card === */
.card {
  width: 100%;
  overflow: hidden;
  background: var(--paper);
  border-radius: var(--radius-md);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}

.card__strip {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem 1.5rem;
  background: var(--primary);
  color: var(--paper);
}

.card__avatar {
  width: 5rem;
  height: 5rem;
  border-radius: 50%;
  border: 4px solid rgba(255, 255, 255, 0.4);
  object-fit: cover;
  cursor: zoom-in;
}

.card__strip-name { font-size: 1.125rem; font-weight: 600; }

.card__content { padding: 2.5rem 3.5rem; }

.card__grid {
  display: grid;
  grid-template-columns: minmax(0, 1.08fr) minmax(0, 0.92fr);
  gap: 3rem;
}

.card__main, .card__aside {
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
}

.card__closing { background: var(--ink); }
.card__closing img { width: 100%; height: 16rem; object-fit: cover; display: block; }

@media (max-width: 1024px) {
  .card__grid { grid-template-columns: 1fr; }
  .card__content { padding: 2.5rem 1.5rem; }
}

/* === Toast === */
.toast-container {
  pointer-events: none;
  position: fixed;
  top: 1.5rem;
  left: 0;
  right: 0;
  z-index: 60;
  display: flex;
  justify-content: center;
  padding: 0 1rem;
}

.toast {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1.5rem;
  border: 1px solid var(--primary);
  border-radius: 999px;
  background: var(--paper);
  color: var(--primary);
  font-size: 0.875rem;
  font-weight: 600;
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3);
}

/* === Buttons === */
.btn-solid, .btn-outline, .btn-dark, .btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  border-radius: var(--radius-lg);
  transition: all var(--transition-fast);
}

.btn-solid { background: var(--primary); color: var(--paper); border: none; padding: 0.75rem 1.5rem; }
.btn-outline { background: var(--paper); color: var(--ink); border: 1px solid var(--line); }
.btn-outline:hover { border-color: var(--primary); box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1); }
.btn-dark { background: var(--ink); color: var(--paper); border: none; }
.btn-dark:hover { background: rgba(17, 17, 17, 0.8); }
.btn-ghost { background: transparent; border: 1px solid var(--primary); color: var(--primary); }
.btn-ghost:hover { background: var(--primary-soft); }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  border-radius: 50%;
  border: 1px solid rgba(255, 255, 255, 0.6);
  background: rgba(255, 255, 255, 0.15);
  color: var(--paper);
  transition: background var(--transition-fast);
}

.icon-btn:hover { background: rgba(255, 255, 255, 0.25); }

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 20;
  background: rgba(0, 0, 0, 0.6);
  border-color: rgba(255, 255, 255, 0.4);
}

/* === Badges === */
.badge {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.125rem 0.625rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 600;
}

.badge--default { background: var(--primary); color: var(--paper); border: 1px solid transparent; }
.badge--outline { background: transparent; color: var(--ink); border: 1px solid var(--line); }
.badge--soft { border-color: var(--primary); background: var(--primary-soft); color: var(--primary); border-radius: var(--radius-md); padding: 0.25rem 1rem; }
.tag--accent { color: var(--primary); }

/* === Hero === */
.hero { display: flex; flex-direction: column; gap: 1.5rem; }
.hero__header { display: flex; flex-direction: column; gap: 1rem; }

.hero__badge {
  align-self: flex-start;
  padding: 0.25rem 1rem;
  border-radius: 999px;
  background: var(--primary-soft);
  color: var(--primary);
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.3em;
}

.hero__name { font-size: 3rem; font-weight: 700; line-height: 1.1; }
.hero__title { font-size: 1.125rem; font-weight: 600; color: var(--primary); }

.panel {
  padding: 1.5rem;
  border: 1px solid var(--line);
  border-radius: var(--radius-lg);
  background: var(--paper);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.panel__row { display: flex; align-items: flex-start; gap: 1rem; }

.panel__icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  border-radius: var(--radius-md);
  background: var(--primary-soft);
  color: var(--primary);
}

.company { display: flex; flex-direction: column; gap: 1rem; }
.company__name { font-size: 1.25rem; font-weight: 600; }
.company__description { margin-top: 0.25rem; font-size: 0.875rem; color: var(--muted); }
.company__addresses { display: flex; flex-direction: column; gap: 0.75rem; font-size: 0.875rem; }
.company__address-label { font-weight: 600; color: var(--primary); }
.company__address { margin-top: 0.25rem; }

.tags, .pills { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.pills { margin-top: 1rem; gap: 0.75rem; }
.pill { border-color: var(--primary); color: var(--primary); padding: 0.5rem 1.25rem; }

/* === Contact actions === */
.contacts { display: flex; flex-direction: column; gap: 1.5rem; }
.contacts__list { display: flex; flex-direction: column; gap: 1rem; }
.contacts__quick { display: flex; flex-wrap: wrap; gap: 1rem; }

.contact-btn {
  width: 100%;
  justify-content: space-between;
  padding: 1.5rem;
  text-align: left;
}

.contact-btn__body { display: flex; align-items: center; gap: 1rem; }

.contact-btn__icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: var(--radius-md);
  background: var(--primary);
  color: var(--paper);
  transition: transform var(--transition-fast);
}

.contact-btn:hover .contact-btn__icon { transform: scale(1.05); }
.contact-btn__text { display: flex; flex-direction: column; gap: 0.25rem; }
.contact-btn__label { font-size: 0.75rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.32em; color: var(--primary); }
.contact-btn__detail { font-size: 1.125rem; font-weight: 600; }
.contact-btn__arrow { color: var(--primary); transition: transform var(--transition-fast); }
.contact-btn:hover .contact-btn__arrow { transform: translate(0.25rem, -0.25rem); }

.quick-btn { padding: 1.25rem 1.5rem; font-weight: 600; }
.quick-btn--share { background: var(--paper); }

/* === Gallery === */
.gallery {
  position: relative;
  overflow: hidden;
  border-radius: var(--radius-lg);
  background: var(--ink);
  color: var(--paper);
}

.gallery__stage {
  position: relative;
  height: 18rem;
  overflow: hidden;
  outline: none;
}

.gallery__img, .gallery-modal__img {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0;
  transition: opacity var(--transition-fade);
}

.gallery__img { cursor: zoom-in; }
.gallery__img--active, .gallery-modal__img--active { opacity: 1; }

.gallery__shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.5), transparent);
  pointer-events: none;
}

.gallery__intro {
  pointer-events: none;
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.6);
}

.gallery__intro-label {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
  border-radius: var(--radius-md);
  background: rgba(255, 255, 255, 0.95);
  color: var(--ink);
  font-size: 0.875rem;
  font-weight: 600;
}

.gallery__cta, .gallery-modal__cta {
  position: absolute;
  top: 1rem;
  right: 1rem;
  padding: 0.5rem 1rem;
  border-color: rgba(255, 255, 255, 0.8);
  color: var(--paper);
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.2em;
}

.gallery__cta:hover, .gallery-modal__cta:hover { background: rgba(255, 255, 255, 0.1); }

.gallery__dots {
  position: absolute;
  bottom: 1rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  gap: 0.5rem;
}

.dot {
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
  border: 1px solid var(--paper);
  background: transparent;
}

.dot--active { background: var(--primary); }

.gallery__nav {
  position: absolute;
  top: 0;
  bottom: 0;
  display: flex;
  align-items: center;
}

.gallery__nav--prev { left: 0.75rem; }
.gallery__nav--next { right: 0.75rem; }

.gallery__footer, .gallery-modal__footer {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  padding: 1.5rem;
}

.gallery__caption { font-weight: 600; }

.counter {
  padding: 0.25rem 0.75rem;
  border: 1px solid rgba(255, 255, 255, 0.3);
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.1);
  font-size: 0.75rem;
  font-weight: 600;
}

/* === Modals === */
.modal-overlay, .lightbox {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem 1rem;
  background: var(--scrim);
}

.lightbox { background: rgba(0, 0, 0, 0.9); }

.gallery-modal {
  position: relative;
  width: 100%;
  max-width: 56rem;
  overflow: hidden;
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: var(--radius-lg);
  background: rgba(0, 0, 0, 0.9);
  color: var(--paper);
}

.gallery-modal__stage {
  position: relative;
  height: 60vh;
  min-height: 360px;
  overflow: hidden;
}

.gallery-modal__cta { top: 1.5rem; right: 4.5rem; }
.gallery-modal__footer { border-top: 1px solid rgba(255, 255, 255, 0.1); background: rgba(0, 0, 0, 0.8); }
.gallery-modal__dots { bottom: 6.5rem; }
.gallery-modal__dots .dot { width: 0.875rem; height: 0.875rem; }

.gallery-modal__badge {
  pointer-events: none;
  position: absolute;
  top: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.1);
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.3em;
}

.lightbox__frame { position: relative; width: 100%; max-width: 48rem; max-height: 90vh; }
.lightbox__frame .close-btn { top: -2.75rem; right: 0; }
.lightbox__img { width: 100%; height: auto; max-height: 80vh; object-fit: contain; border-radius: 0.5rem; }

.share-prompt {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  width: 100%;
  max-width: 28rem;
  padding: 2.5rem 2rem 2rem;
  border-radius: var(--radius-lg);
  background: var(--paper);
}

.share-prompt .close-btn { background: var(--ink); }
.share-prompt__title { font-size: 1.125rem; font-weight: 600; }

.share-prompt__url {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--line);
  border-radius: var(--radius-md);
  font-family: monospace;
  font-size: 0.875rem;
}

.share-prompt__qr { width: 12rem; }
.share-prompt__qr svg { width: 100%; height: auto; display: block; }

/* === Insights === */
.insights { display: flex; flex-direction: column; gap: 2rem; }
.insights__head { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
.insights__logo { height: 3rem; width: auto; }
.insights__title { font-size: 1.125rem; font-weight: 600; }
.insights__bullets { list-style: none; display: flex; flex-direction: column; gap: 0.75rem; font-size: 0.875rem; color: var(--muted); }
.insights__description { font-size: 0.875rem; color: var(--muted); }
.insights__grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 1rem; }
.insights__item { padding: 1rem; border: 1px solid var(--line); border-radius: var(--radius-md); }
.insights__item-text { margin-top: 0.5rem; font-weight: 600; }
"#;
