// Static collections rendered by the landing page sections.

#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub name: &'static str,
    pub time: &'static str,
    pub text: &'static str,
    pub stars: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServicePackage {
    pub title: &'static str,
    pub price_old: &'static str,
    pub price_new: &'static str,
    pub time: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
}

const fn review(name: &'static str, time: &'static str, text: &'static str) -> Review {
    Review { name, time, text, stars: 5 }
}

pub const REVIEWS: &[Review] = &[
    review("Anum Patel", "3 months ago", "I couldn't be happier with the detailing job done on my car! It looks and feels brand new, inside and out. Every little nook was cleaned, the paint is shining, and even the carpets smell fresh. The team was professional and friendly throughout the whole process. Highly recommend!"),
    review("Zaeem Naeem Mirza", "3 months ago", "Got a full paint correction and detail on my M4. The car looks absolutely flawless now. Haris is very professional and clearly knows his stuff. Highly recommended!"),
    review("Hamdi Hilal", "4 months ago", "I had my Lexus ES350 interior detailed by Haris and couldn't be more impressed. He treated my car with great care, and it looks and smells brand new. Highly recommend Precision for top-notch detailing!"),
    review("RVWL", "4 months ago", "Shayan detailed my car so well that I was ready to sell it, but now I don't even want to let it go. It looks brand new, inside and out, and I've completely fallen back in love with it!"),
    review("Sam Paul", "2 years ago", "I've used Royal Touch Detailing a few times and never been disappointed. Shayan is very professional and takes great pride in his work. Excellent service at very reasonable prices."),
    review("Sema Balaban", "6 months ago", "My car looks absolutely amazing! Looks brand new. I've never had it detailed this good before. Highly recommend. Will be referring all family and friends to Royal Touch."),
    review("N Grattan", "5 months ago", "Very pleased with our car detailing. Convenient home service. He was punctual, polite, and professional. Looking forward to another family car done soon."),
    review("Hasnain Buttar", "1 year ago", "Royal Touch exceeded all expectations. Professionalism and attention to detail were exceptional from start to finish."),
    review("Yasmin", "2 years ago", "SO happy with the service. Shayan was punctual, professional, and knowledgeable. Gold interior + exterior packages made my used car feel brand new!"),
    review("Musa Ali", "4 months ago", "They did my interior and exterior detailing and it was excellent, efficient and amazing pricing. Totally recommend!"),
    review("Victoria Young", "5 months ago", "As a fellow entrepreneur, I was impressed from the moment I contacted Royal Touch Detailing. The owner was accommodating to my situation as I needed a last minute detail."),
    review("Yousef", "1 day ago", "Great work. Great prices. These guys were professional, on time and very polite. Big points for coming to my work to do my car."),
    review("Christmas Lights", "12 hours ago", "Great work would recommend!"),
    review("Antoine Aurelis", "1 year ago", "Great job, very knowledgeable and helpful."),
    review("Bala Subramanian", "1 year ago", "Shayan did an amazing job of cleaning the car inside out. It looks beautiful, just like I got it first time. The best part is it is done at home without me going out and struggling to work from customer service area. Definitely worth it! Best wishes for success in this business!"),
    review("Khizr Shamsi", "8 months ago", "Such a good company and made me happy."),
    review("Ashar Sid", "1 year ago", "If his prices were $5000 I would still be willing to pay for it! Best in the business."),
    review("Elliott Williams", "5 months ago", "Very professional service and the car looks amazing afterwards. Would highly recommend if you're looking to get your car detailed."),
    review("Ali Chaudhry", "5 months ago", "Very pleased with our car detailing. It was very convenient to have the work done at home. He was punctual, polite and very professional."),
];

pub const GALLERY: &[Photo] = &[
    Photo { src: "/Images/detailing1.jpg", alt: "Auto detailing 1" },
    Photo { src: "/Images/detailing2.jpg", alt: "Auto detailing 2" },
    Photo { src: "/Images/detailing3.jpg", alt: "Auto detailing 3" },
    Photo { src: "/Images/detailing4.jpg", alt: "Auto detailing 4" },
    Photo { src: "/Images/detailing5.jpg", alt: "Auto detailing 5" },
    Photo { src: "/Images/detailing6.jpg", alt: "Auto detailing 6" },
    Photo { src: "/Images/detailing7.jpg", alt: "Auto detailing 7" },
    Photo { src: "/Images/detailing8.jpg", alt: "Auto detailing 8" },
];

pub const SCREENSHOTS: &[Photo] = &[
    Photo { src: "/reviews/review-1.jpg", alt: "Review screenshot 1" },
    Photo { src: "/reviews/review-2.jpg", alt: "Review screenshot 2" },
    Photo { src: "/reviews/review-3.jpg", alt: "Review screenshot 3" },
    Photo { src: "/reviews/review-4.jpg", alt: "Review screenshot 4" },
    Photo { src: "/reviews/review-5.jpg", alt: "Review screenshot 5" },
    Photo { src: "/reviews/review-6.jpg", alt: "Review screenshot 6" },
];

pub const SERVICES: &[ServicePackage] = &[
    ServicePackage {
        title: "Royal Premium Interior + Exterior Detail",
        price_old: "$250",
        price_new: "$180",
        time: "Estimated Time: 3 Hours",
        description: "Complete signature package: interior deep clean plus exterior gloss & protection for a showroom-level refresh.",
        image: "/Images/service3.jpg",
        features: &[
            "Deep shampoo & steam clean",
            "Deep Stain Removal",
            "Dash & console detail",
            "Windows & mirrors crystal-clear",
            "Hand wash & dry",
            "Wheels, tires & tire shine",
            "Wax/sealant for lasting protection",
        ],
    },
    ServicePackage {
        title: "Royal Premium Interior Detail",
        price_old: "$180",
        price_new: "$140",
        time: "Estimated Time: 2 Hours",
        description: "Cabin restoration with precision cleaning, odor reduction, and conditioning for a like-new feel.",
        image: "/Images/service1.jpg",
        features: &[
            "Deep Stain Removal",
            "Vacuuming floors/mats",
            "Shampoo seats & carpets",
            "Leather/vinyl clean & condition",
            "Vents, pockets & compartments",
            "Headliner spot clean",
            "Windows & mirrors",
        ],
    },
    ServicePackage {
        title: "Royal Premium Exterior Detail",
        price_old: "$100",
        price_new: "$70",
        time: "Estimated Time: 1 Hour",
        description: "Professional exterior refresh: removes dust & road film, revives gloss, and protects your paint.",
        image: "/Images/service2.jpg",
        features: &[
            "Foam wash & hand dry",
            "Bug/tar removal",
            "Clean windows & mirrors",
            "Dress exterior trims",
            "Light polish (if needed)",
            "Tire shine application",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_are_populated() {
        assert_eq!(REVIEWS.len(), 19);
        assert_eq!(GALLERY.len(), 8);
        assert_eq!(SCREENSHOTS.len(), 6);
        assert!(REVIEWS.iter().all(|r| (1..=5).contains(&r.stars)));
        assert!(SERVICES.iter().all(|s| !s.features.is_empty()));
    }
}
