use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::booking_chat::BookingChat;
use crate::components::reveal::use_reveal_on_scroll;

const SERVICES: [(&str, &str, &str); 4] = [
    ("🏥", "Clinics & Doctors", "Patients pick a slot at midnight without calling the front desk."),
    ("✂️", "Salons & Spas", "Fill cancellations automatically and keep every chair busy."),
    ("💼", "Consultants", "Qualify leads and put meetings straight into your calendar."),
    ("💻", "Online Services", "Book video sessions across time zones with no back and forth."),
];

const BENEFITS: [(&str, &str); 4] = [
    ("24/7 availability", "Bookings keep coming in after hours."),
    ("Fewer no-shows", "Confirmations and reminders go out on their own."),
    ("Less admin", "Your staff stops playing phone tag."),
    ("Quick setup", "Drop the assistant on your site in an afternoon."),
];

const PLANS: [(&str, &str, &str); 3] = [
    ("Starter", "$29/mo", "One calendar, 100 bookings a month"),
    ("Growth", "$79/mo", "Five calendars, unlimited bookings"),
    ("Business", "Custom", "Multiple locations and integrations"),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("We stopped missing evening bookings entirely.", "Dental clinic owner"),
    ("Half our appointments now come through the assistant.", "Salon manager"),
    ("Clients love that they can book in ten seconds.", "Independent consultant"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    use_reveal_on_scroll();

    html! {
        <div class="landing-page">
            <header class="hero" id="home">
                <div class="hero-content">
                    <h1>{"Your AI Booking Assistant"}</h1>
                    <p class="hero-subtitle">
                        {"Let customers schedule appointments in seconds, any time of day."}
                    </p>
                    <div class="hero-cta-group">
                        <AnchorLink href="#demo" classes={classes!("hero-cta")}>
                            {"Try the Demo"}
                        </AnchorLink>
                        <AnchorLink href="#pricing" classes={classes!("hero-secondary")}>
                            {"See Pricing"}
                        </AnchorLink>
                    </div>
                </div>
            </header>

            <section class="services" id="services">
                <h2>{"Built for Appointment-Driven Businesses"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|(icon, title, text)| html! {
                        <div class="service-card">
                            <div class="service-icon">{ *icon }</div>
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="demo" id="demo">
                <h2>{"See It in Action"}</h2>
                <p>{"Book a pretend appointment with the assistant below."}</p>
                <BookingChat />
            </section>

            <section class="benefits" id="benefits">
                <h2>{"Why Businesses Switch"}</h2>
                <div class="benefits-grid">
                    { for BENEFITS.iter().map(|(title, text)| html! {
                        <div class="benefit-card">
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="pricing" id="pricing">
                <h2>{"Simple Pricing"}</h2>
                <div class="pricing-grid">
                    { for PLANS.iter().map(|(name, price, blurb)| html! {
                        <div class="pricing-card">
                            <h3>{ *name }</h3>
                            <div class="price">{ *price }</div>
                            <p>{ *blurb }</p>
                            <AnchorLink href="#demo" classes={classes!("pricing-cta")}>
                                {"Get Started"}
                            </AnchorLink>
                        </div>
                    }) }
                </div>
            </section>

            <section class="testimonials" id="testimonials">
                <h2>{"What Customers Say"}</h2>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                        <div class="testimonial-card">
                            <p class="quote">{ *quote }</p>
                            <p class="author">{ *author }</p>
                        </div>
                    }) }
                </div>
            </section>

            <footer class="footer">
                <p>{"© BookBot"}</p>
                <AnchorLink href="#home">{"Back to top"}</AnchorLink>
            </footer>
        </div>
    }
}
