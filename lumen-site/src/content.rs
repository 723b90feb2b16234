//! Page copy
//!
//! Static text rendered by the view layer. The carousel is mounted over
//! however many testimonials are listed here.

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub treatment: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub name: &'static str,
    pub summary: &'static str,
    pub from_price: &'static str,
}

pub const BRAND: &str = "Lumen Aesthetics";
pub const TAGLINE: &str = "Natural results, expertly delivered";
pub const HERO_BLURB: &str = "Medical-grade skin treatments in a calm, \
     welcoming clinic. Every plan starts with a one-to-one consultation.";
pub const ABOUT_TITLE: &str = "Care that starts with listening";
pub const ABOUT_BODY: &str = "Our practitioners are registered nurses and \
     aestheticians with more than fifteen years of combined experience. We \
     take the time to understand your goals and recommend only what will \
     genuinely help.";

pub const SERVICES: &[Service] = &[
    Service {
        name: "Signature Facial",
        summary: "Deep cleanse, exfoliation and hydration tailored to your skin.",
        from_price: "from £85",
    },
    Service {
        name: "Chemical Peels",
        summary: "Resurface and brighten with clinically proven acids.",
        from_price: "from £120",
    },
    Service {
        name: "Microneedling",
        summary: "Stimulate collagen to soften scarring and fine lines.",
        from_price: "from £180",
    },
    Service {
        name: "Anti-wrinkle",
        summary: "Subtle softening of expression lines by a nurse prescriber.",
        from_price: "from £200",
    },
    Service {
        name: "Dermal Fillers",
        summary: "Restore lost volume with hyaluronic acid fillers.",
        from_price: "from £250",
    },
    Service {
        name: "LED Therapy",
        summary: "Calm inflammation and support healing, no downtime.",
        from_price: "from £45",
    },
];

/// Names offered in the contact form's service picker.
pub const SERVICE_NAMES: &[&str] = &[
    "Signature Facial",
    "Chemical Peels",
    "Microneedling",
    "Anti-wrinkle",
    "Dermal Fillers",
    "LED Therapy",
    "Not sure yet",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "My skin hasn't looked this good in years. The team explained \
                every step and never pushed anything I didn't need.",
        author: "Sarah M.",
        treatment: "Chemical Peels",
    },
    Testimonial {
        quote: "Relaxed, professional and the results are so natural that \
                friends just say I look well rested.",
        author: "Priya K.",
        treatment: "Anti-wrinkle",
    },
    Testimonial {
        quote: "Three sessions in and the acne scarring on my cheeks has \
                visibly softened. Worth every penny.",
        author: "James T.",
        treatment: "Microneedling",
    },
    Testimonial {
        quote: "The signature facial is my monthly treat. I leave glowing \
                every single time.",
        author: "Elena R.",
        treatment: "Signature Facial",
    },
    Testimonial {
        quote: "Honest advice from the first consultation. They talked me out \
                of a treatment I didn't need.",
        author: "Hannah L.",
        treatment: "Consultation",
    },
    Testimonial {
        quote: "Subtle lip filler exactly as discussed. Aftercare calls were \
                a lovely touch.",
        author: "Chloe W.",
        treatment: "Dermal Fillers",
    },
];

pub const CONTACT_ADDRESS: &str = "12 Orchard Lane, Bath BA1 2AB";
pub const CONTACT_PHONE: &str = "01225 000 123";
pub const CONTACT_EMAIL: &str = "hello@lumen-aesthetics.example";
pub const OPENING_HOURS: &str = "Tue-Sat, 9:00-18:00";
