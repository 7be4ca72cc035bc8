use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Site-wide stylesheet. Layout uses logical properties so `dir="rtl"` on
/// the root mirrors the page without per-component rules.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <Global css={css!(r#"
            * { box-sizing: border-box; margin: 0; padding: 0; }
            html { scroll-behavior: auto; }
            body {
                font-family: "Inter", "Segoe UI", Tahoma, sans-serif;
                color: #111827;
                background: #ffffff;
                line-height: 1.5;
            }
            html[dir="rtl"] body { font-family: "Noto Kufi Arabic", Tahoma, sans-serif; }
            button { font: inherit; cursor: pointer; border: none; background: none; }
            img { max-width: 100%; display: block; }

            .container { max-width: 1200px; margin-inline: auto; padding-inline: 1rem; }
            .section { padding-block: 5rem; }
            .section.muted { background: #f9fafb; }
            .section-heading { text-align: center; margin-block-end: 4rem; }
            .section-heading h2 { font-size: 2.75rem; font-weight: 700; margin-block-end: 1rem; }
            .section-heading p { font-size: 1.25rem; color: #4b5563; max-width: 42rem; margin-inline: auto; }
            .grid { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
            .split { display: grid; gap: 4rem; align-items: center; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }

            .brand { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; font-size: 1.25rem; }
            .brand-mark {
                width: 2rem; height: 2rem; border-radius: 0.5rem;
                background: linear-gradient(135deg, #b91c1c, #7f1d1d);
                color: #fff; display: flex; align-items: center; justify-content: center;
            }

            .site-header {
                position: fixed; inset-block-start: 0; inline-size: 100%; z-index: 50;
                background: rgba(255, 255, 255, 0.95); backdrop-filter: blur(4px);
                transition: box-shadow 0.3s;
            }
            .site-header.scrolled { box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08); }
            .site-header .bar { display: flex; align-items: center; justify-content: space-between; padding-block: 1rem; }
            .site-nav { display: flex; align-items: center; gap: 2rem; }
            .nav-link { color: #374151; font-weight: 500; transition: color 0.3s; }
            .nav-link:hover { color: #b91c1c; }
            .nav-cta { background: #b91c1c; color: #fff; padding: 0.5rem 1.5rem; border-radius: 0.5rem; }
            .nav-cta:hover { background: #991b1b; color: #fff; }
            .language-toggle { display: flex; align-items: center; gap: 0.5rem; color: #374151; }
            .burger { display: none; font-size: 1.5rem; }
            .mobile-menu { display: none; }

            .hero {
                min-height: 100vh; display: flex; align-items: center; padding-block-start: 5rem;
                background: linear-gradient(135deg, #f9fafb, #ffffff);
            }
            .hero h1 { font-size: 3.5rem; font-weight: 700; line-height: 1.15; margin-block-end: 1.5rem; }
            .hero .eyebrow { color: #b91c1c; font-weight: 600; font-size: 1.125rem; margin-block-end: 1rem; display: flex; align-items: center; gap: 0.75rem; }
            .hero .eyebrow::before { content: ""; inline-size: 3rem; block-size: 2px; background: #b91c1c; }
            .hero .lead { font-size: 1.25rem; color: #4b5563; margin-block-end: 2rem; }
            .actions { display: flex; gap: 1rem; flex-wrap: wrap; }
            .btn-primary, .btn-outline {
                padding: 1rem 2rem; border-radius: 0.5rem; font-weight: 600;
                display: inline-flex; align-items: center; gap: 0.5rem; transition: all 0.3s;
            }
            .btn-primary { background: #b91c1c; color: #fff; }
            .btn-primary:hover { background: #991b1b; transform: translateY(-2px); }
            .btn-outline { border: 2px solid #d1d5db; color: #374151; }
            .btn-outline:hover { border-color: #b91c1c; color: #b91c1c; }

            .media { position: relative; }
            .media img { border-radius: 1rem; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
            .floating-card {
                position: absolute; background: #fff; padding: 1rem; border-radius: 0.75rem;
                box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); border: 1px solid #e5e7eb;
            }
            .floating-card.top { inset-block-start: 2.5rem; inset-inline-start: -2.5rem; }
            .floating-card.bottom { inset-block-end: 2.5rem; inset-inline-end: -2.5rem; }
            .floating-card strong { display: block; font-size: 1.5rem; color: #b91c1c; }
            .floating-card span { font-size: 0.875rem; color: #4b5563; }

            .service-card {
                background: #fff; padding: 2rem; border-radius: 1rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); transition: box-shadow 0.5s;
            }
            .service-card:hover { box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2); }
            .service-icon {
                width: 4rem; height: 4rem; border-radius: 0.75rem; margin-block-end: 1.5rem;
                display: flex; align-items: center; justify-content: center; font-size: 2rem;
            }
            .service-card h3 { font-size: 1.25rem; margin-block-end: 0.75rem; }
            .service-card p { color: #4b5563; }

            .project { position: relative; overflow: hidden; border-radius: 1rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
            .project img { width: 100%; height: 16rem; object-fit: cover; transition: transform 0.7s; }
            .project:hover img { transform: scale(1.1); }
            .project .overlay {
                position: absolute; inset: 0; display: flex; align-items: flex-end; padding: 1.5rem;
                background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), transparent);
                color: #fff; opacity: 0;
            }
            .project .category { font-size: 0.875rem; color: #fca5a5; margin-block-end: 0.5rem; }
            .project h3 { font-size: 1.25rem; margin-block-end: 0.5rem; }
            .project p { font-size: 0.875rem; color: #e5e7eb; margin-block-end: 1rem; }
            .project button { color: #fff; }

            .about h2 { font-size: 2.75rem; margin-block-end: 1.5rem; }
            .about h3 { font-size: 1.5rem; color: #b91c1c; margin-block-end: 1.5rem; }
            .about p { font-size: 1.125rem; color: #4b5563; margin-block-end: 2rem; }
            .stats { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
            .stat { text-align: center; }
            .stat-icon {
                width: 4rem; height: 4rem; margin-inline: auto; margin-block-end: 1rem; border-radius: 0.75rem;
                background: #b91c1c; display: flex; align-items: center; justify-content: center; font-size: 2rem;
            }
            .counter { font-size: 1.875rem; font-weight: 700; margin-block-end: 0.5rem; }
            .stat-label { font-size: 0.875rem; color: #4b5563; }

            .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
            .field-row { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
            .field label { display: block; color: #374151; font-weight: 500; margin-block-end: 0.5rem; }
            .field input, .field textarea {
                inline-size: 100%; padding: 0.75rem 1rem; border: 1px solid #d1d5db; border-radius: 0.5rem; font: inherit;
            }
            .field textarea { resize: none; }
            .form-status { font-weight: 500; }
            .form-status.ok { color: #15803d; }
            .form-status.error { color: #b91c1c; }
            .channel { display: flex; align-items: flex-start; gap: 1rem; margin-block-end: 2rem; }
            .channel-icon {
                width: 3rem; height: 3rem; flex-shrink: 0; border-radius: 0.75rem; background: #b91c1c;
                display: flex; align-items: center; justify-content: center; font-size: 1.25rem;
            }
            .channel h3 { font-size: 1.125rem; margin-block-end: 0.5rem; }
            .channel p { color: #4b5563; }
            .map-placeholder {
                inline-size: 100%; block-size: 16rem; border-radius: 1rem; background: #e5e7eb;
                display: flex; flex-direction: column; align-items: center; justify-content: center; color: #6b7280;
            }

            .site-footer { background: #111827; color: #fff; padding-block: 4rem; }
            .site-footer .columns { display: grid; gap: 2rem; grid-template-columns: 2fr 1fr 1fr; }
            .site-footer p, .site-footer li, .footer-link { color: #9ca3af; }
            .footer-link:hover { color: #fff; }
            .site-footer h3 { font-size: 1.125rem; margin-block-end: 1.5rem; }
            .site-footer ul { list-style: none; display: flex; flex-direction: column; gap: 0.75rem; }
            .socials { display: flex; gap: 1rem; }
            .social {
                width: 2.5rem; height: 2.5rem; border-radius: 0.5rem; background: #1f2937; color: #fff;
                display: flex; align-items: center; justify-content: center; text-decoration: none;
            }
            .social:hover { background: #b91c1c; }
            .copyright { border-block-start: 1px solid #1f2937; margin-block-start: 3rem; padding-block-start: 2rem; text-align: center; }

            @media (max-width: 768px) {
                .site-nav { display: none; }
                .burger { display: block; }
                .mobile-menu { display: flex; flex-direction: column; gap: 1rem; padding-block: 1rem; border-block-start: 1px solid #e5e7eb; }
                .hero h1 { font-size: 2.5rem; }
                .site-footer .columns { grid-template-columns: 1fr; }
                .floating-card { display: none; }
            }
        "#)} />
    }
}
