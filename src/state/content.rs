/// Static marketing content shown on the informational screens

pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub pet_name: &'static str,
    pub quote: &'static str,
}

pub struct Article {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
}

pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub label: &'static str,
    pub value: u32,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Priya Sharma",
        location: "Mumbai",
        pet_name: "Cookie",
        quote: "Adopting Cookie was the best decision we ever made. PawAdopt made the process so \
            smooth and transparent. Our home is now filled with so much love and laughter!",
    },
    Testimonial {
        name: "Rahul Patel",
        location: "Bangalore",
        pet_name: "Simba",
        quote: "I was nervous about adopting my first pet, but the team at PawAdopt guided me \
            through everything. Simba has become my best friend and the perfect companion for my \
            apartment.",
    },
    Testimonial {
        name: "Ananya Reddy",
        location: "Chennai",
        pet_name: "Buddy",
        quote: "After losing our old dog, we thought we'd never love again. But Buddy came into \
            our lives through PawAdopt and filled that void beautifully. Thank you for \
            connecting us!",
    },
];

pub const ARTICLES: [Article; 4] = [
    Article {
        title: "First-Time Pet Parent? Here's Everything You Need to Know",
        excerpt: "A comprehensive guide for new pet parents covering essentials from nutrition to \
            veterinary care.",
        category: "Getting Started",
        read_time: "8 min read",
    },
    Article {
        title: "Understanding Your Dog's Body Language",
        excerpt: "Learn to read your furry friend's signals and strengthen your bond through \
            better communication.",
        category: "Dog Care",
        read_time: "5 min read",
    },
    Article {
        title: "The Complete Vaccination Guide for Indian Pets",
        excerpt: "Everything you need to know about essential vaccinations and schedules for dogs \
            and cats in India.",
        category: "Health",
        read_time: "6 min read",
    },
    Article {
        title: "Creating a Cat-Friendly Home in Your Apartment",
        excerpt: "Simple tips and tricks to make your apartment the perfect haven for your \
            feline companion.",
        category: "Cat Care",
        read_time: "4 min read",
    },
];

pub const ARTICLE_CATEGORIES: [&str; 4] = ["Getting Started", "Dog Care", "Cat Care", "Health"];

pub const ADOPTION_STEPS: [Step; 3] = [
    Step {
        title: "Browse & Discover",
        description: "Explore our curated collection of rescued pets. Use filters to find pets \
            by type, age, location, and more. Each pet has a detailed profile with photos, \
            personality traits, and health information.",
    },
    Step {
        title: "Connect & Meet",
        description: "Found a pet you love? Submit an adoption request through our platform. The \
            rescue organization or foster parent will review your request and arrange a \
            meet-and-greet session.",
    },
    Step {
        title: "Adopt & Welcome Home",
        description: "After a successful meeting, complete the adoption formalities. Our partner \
            NGOs will guide you through the process, and you can finally bring your new family \
            member home!",
    },
];

pub const PROMISES: [&str; 4] = [
    "Verified Rescues",
    "Health Checked",
    "Vaccinated",
    "Support Available",
];

pub const STATS: [Stat; 4] = [
    Stat { label: "Pets Adopted", value: 2847 },
    Stat { label: "NGOs Connected", value: 156 },
    Stat { label: "Cities Covered", value: 45 },
    Stat { label: "Happy Families", value: 2500 },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 5] = [
    Faq {
        question: "Is there an adoption fee?",
        answer: "Adoption fees vary by rescue organization. Some may charge a nominal fee to cover \
            vaccination, neutering, and care costs. All fees are transparent and communicated upfront.",
    },
    Faq {
        question: "What documents do I need?",
        answer: "Typically, you'll need a valid ID proof and address proof. Some organizations may \
            ask for a home visit or video call to ensure the pet will have a safe environment.",
    },
    Faq {
        question: "Can I return the pet if it doesn't work out?",
        answer: "Most rescue organizations have a return policy within a certain period. However, \
            we encourage you to give the pet adequate time to adjust (usually 2-4 weeks) before \
            making a decision.",
    },
    Faq {
        question: "Are the pets vaccinated?",
        answer: "Most pets listed on PawAdopt are vaccinated and dewormed. Each pet's profile \
            clearly mentions their vaccination status and health details.",
    },
    Faq {
        question: "Can I adopt if I live in an apartment?",
        answer: "Absolutely! Many pets are apartment-friendly. Check the pet's profile for \
            compatibility information when browsing.",
    },
];

/// Rescue organizations shown on the about screen
pub const PARTNERS: [&str; 6] = [
    "CUPA Bangalore",
    "Friendicoes Delhi",
    "Blue Cross Chennai",
    "RESQ Pune",
    "PFA Hyderabad",
    "SPCA Mumbai",
];

/// Articles in a category; `None` means all
pub fn articles_in<'a>(category: Option<&'a str>) -> impl Iterator<Item = &'static Article> + 'a {
    ARTICLES
        .iter()
        .filter(move |a| category.map_or(true, |c| a.category == c))
}

/// Render a statistic the way the site does, e.g. "2,847+"
pub fn format_stat(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('+');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(2847), "2,847+");
        assert_eq!(format_stat(45), "45+");
        assert_eq!(format_stat(1_000_000), "1,000,000+");
    }

    #[test]
    fn test_articles_by_category() {
        assert_eq!(articles_in(None).count(), ARTICLES.len());
        let health: Vec<_> = articles_in(Some("Health")).collect();
        assert_eq!(health.len(), 1);
        assert!(health[0].title.contains("Vaccination"));
    }
}
