use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_form::ContactFormView;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer id="contact" class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: linear-gradient(135deg, #f0f9ff, #e0f2fe);
                        padding: 5rem 2rem 2rem;
                        color: #1f2937;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1.2fr 1fr 1fr;
                        gap: 3rem;
                    }
                    .footer-grid h3 {
                        font-size: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .footer-grid ul {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-grid li {
                        color: #4b5563;
                        font-size: 0.9rem;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form .form-row {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid #cbd5e1;
                        font: inherit;
                        resize: vertical;
                    }
                    .contact-form .invalid {
                        border-color: #ef4444;
                    }
                    .field-error, .submit-error {
                        color: #dc2626;
                        font-size: 0.85rem;
                        margin-top: 0.25rem;
                    }
                    .contact-submit {
                        width: 100%;
                        height: 3rem;
                        border: none;
                        border-radius: 0.75rem;
                        color: #fff;
                        font-weight: 600;
                        background: linear-gradient(to right, #2563eb, #0ea5e9, #06b6d4);
                        cursor: pointer;
                    }
                    .contact-submit:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .contact-success {
                        text-align: center;
                        padding: 3rem 0;
                    }
                    .contact-success h4 {
                        color: #16a34a;
                        font-size: 1.5rem;
                    }
                    .footer-bottom {
                        text-align: center;
                        margin-top: 3rem;
                        color: #6b7280;
                        font-size: 0.85rem;
                    }
                    @media (max-width: 900px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h3>{"Get in Touch"}</h3>
                    <ContactFormView />
                </div>
                <div>
                    <h3>{"Explore"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::AboutUs}>{"About Us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::OurServices}>{"Our Services"}</Link<Route>></li>
                        <li><Link<Route> to={Route::PoolTypes}>{"Pool Types"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Services"}</h3>
                    <ul>
                        <li>{"Pool Design & Consultation"}</li>
                        <li>{"Construction & Installation"}</li>
                        <li>{"Accessories & Equipment"}</li>
                        <li>{"Waterproofing Solutions"}</li>
                        <li>{"Maintenance & Repairs"}</li>
                    </ul>
                </div>
            </div>
            <p class="footer-bottom">{format!("© {} Swim Designers. All rights reserved.", year)}</p>
        </footer>
    }
}
