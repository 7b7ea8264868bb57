//! Static site content.
//!
//! Read-only reference data for every page: the profile/brand, case
//! studies, process steps, experience timeline, FAQ, and so on. None of
//! this carries cross-component invariants; each page renderer reads
//! what it needs and nothing else.

use once_cell::sync::Lazy;

// ============================================================================
// Profile / brand
// ============================================================================

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub location: &'static str,
    pub location_note: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Chen",
    role: "Senior UI/UX Designer",
    tagline: "UX Design Leader • Systematic Thinking • Strategic Execution",
    email: "alex@alexchen.design",
    linkedin: "linkedin.com/in/alexchen-design",
    location: "San Francisco, CA",
    location_note: "Open to remote work",
};

/// mailto: link for the profile email, built once.
pub static MAILTO: Lazy<String> = Lazy::new(|| format!("mailto:{}", PROFILE.email));

/// Full https URL for the LinkedIn profile, built once.
pub static LINKEDIN_URL: Lazy<String> = Lazy::new(|| format!("https://{}", PROFILE.linkedin));

// ============================================================================
// Case studies (Work page)
// ============================================================================

pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub overview: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    /// (metric label, value) pairs shown in the impact grid.
    pub impact: &'static [(&'static str, &'static str)],
    pub timeline: &'static str,
    pub team: &'static str,
    pub tags: &'static [&'static str],
    pub details: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Mobile App Redesign",
        subtitle: "Consumer Fintech App",
        overview: "Led the complete redesign of a personal finance app, focusing on improving user engagement and reducing churn.",
        challenge: "Users were abandoning the app after initial setup, with only 23% returning after the first week.",
        solution: "Implemented progressive disclosure, gamification elements, and a simplified onboarding flow.",
        impact: &[
            ("engagement", "+40%"),
            ("retention", "+65%"),
            ("support", "-45%"),
        ],
        timeline: "3 months",
        team: "3 designers, 4 developers, 1 PM",
        tags: &["Mobile Design", "User Research", "Prototyping"],
        details: &[
            "Conducted 15+ user interviews to understand pain points",
            "Created comprehensive user journey maps",
            "Developed high-fidelity prototypes with micro-interactions",
            "Collaborated with engineering on implementation strategy",
            "A/B tested key flows with 5,000+ users",
        ],
    },
    Project {
        title: "SaaS Dashboard Redesign",
        subtitle: "B2B Analytics Platform",
        overview: "Redesigned the core dashboard for a B2B analytics platform to improve data discovery and reduce time-to-insight.",
        challenge: "Users spent 40+ minutes trying to find relevant data insights, leading to high support ticket volume.",
        solution: "Created an intelligent dashboard with customizable widgets, smart filtering, and contextual help.",
        impact: &[
            ("efficiency", "+70%"),
            ("support", "-60%"),
            ("satisfaction", "+55%"),
        ],
        timeline: "4 months",
        team: "2 designers, 6 developers, 1 PM, 1 Data Analyst",
        tags: &[
            "Dashboard Design",
            "Data Visualization",
            "Information Architecture",
        ],
        details: &[
            "Analyzed user behavior data from 10,000+ sessions",
            "Conducted task analysis with 20 power users",
            "Designed modular component system for flexibility",
            "Created comprehensive style guide for data visualization",
            "Implemented progressive disclosure for complex features",
        ],
    },
    Project {
        title: "Design System Creation",
        subtitle: "Enterprise Design System",
        overview: "Built a comprehensive design system from scratch to unify the experience across 12 different product areas.",
        challenge: "Inconsistent UI patterns across products led to confused users and slow development cycles.",
        solution: "Created 'Unify' - a design system with 50+ components, clear guidelines, and developer-friendly documentation.",
        impact: &[
            ("velocity", "+3x"),
            ("consistency", "+90%"),
            ("bugs", "-50%"),
        ],
        timeline: "6 months",
        team: "4 designers, 3 developers, 1 PM",
        tags: &["Design Systems", "Component Library", "Documentation"],
        details: &[
            "Audited existing patterns across 12 product areas",
            "Created token-based design system with 8 color palettes",
            "Built Storybook documentation with live code examples",
            "Established governance process for system evolution",
            "Trained 15+ team members on system adoption",
        ],
    },
];

// ============================================================================
// Process page
// ============================================================================

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub deliverables: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Research & Discovery",
        description: "Every great solution starts with understanding the problem deeply.",
        details: &[
            "Stakeholder interviews to align on goals and constraints",
            "User research to understand needs, behaviors, and pain points",
            "Competitive analysis and market landscape review",
            "Data analysis to identify patterns and opportunities",
        ],
        deliverables: "Research synthesis, personas, journey maps, opportunity areas",
    },
    ProcessStep {
        number: "02",
        title: "Strategy & Planning",
        description: "Turning insights into actionable design strategy and measurable goals.",
        details: &[
            "Define success metrics and key performance indicators",
            "Prioritize features and improvements based on impact/effort",
            "Create design principles specific to the project",
            "Establish project timeline and resource requirements",
        ],
        deliverables: "Design strategy document, project roadmap, success metrics framework",
    },
    ProcessStep {
        number: "03",
        title: "Ideation & Exploration",
        description: "Exploring multiple solutions through rapid iteration and validation.",
        details: &[
            "Collaborative workshops with cross-functional teams",
            "Rapid sketching and low-fidelity prototyping",
            "Concept validation through user testing and feedback",
            "Information architecture and user flow design",
        ],
        deliverables: "Concept sketches, user flows, wireframes, validated concepts",
    },
    ProcessStep {
        number: "04",
        title: "Design & Refinement",
        description: "Crafting polished solutions that balance user needs with business goals.",
        details: &[
            "High-fidelity design creation with attention to detail",
            "Interactive prototyping for complex user interactions",
            "Design system integration and component creation",
            "Accessibility review and compliance validation",
        ],
        deliverables: "High-fidelity designs, interactive prototypes, design specifications",
    },
    ProcessStep {
        number: "05",
        title: "Validation & Testing",
        description: "Ensuring solutions work for real users before development begins.",
        details: &[
            "Usability testing with target users",
            "A/B testing for key decisions and improvements",
            "Stakeholder review and feedback integration",
            "Technical feasibility validation with engineering",
        ],
        deliverables: "Testing results, design iterations, final specifications",
    },
    ProcessStep {
        number: "06",
        title: "Implementation & Optimization",
        description: "Collaborating closely with development and monitoring post-launch metrics.",
        details: &[
            "Developer handoff with detailed specifications",
            "QA review and design implementation validation",
            "Post-launch metrics monitoring and analysis",
            "Iterative improvements based on user feedback and data",
        ],
        deliverables: "Design handoff package, QA checklist, performance analysis",
    },
];

pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRINCIPLES: &[Principle] = &[
    Principle {
        title: "User-Centered",
        description: "Every decision is validated through user research and real-world testing. I believe in designing with users, not for them.",
    },
    Principle {
        title: "Systems Thinking",
        description: "I consider how each design decision impacts the larger ecosystem, from brand consistency to technical constraints.",
    },
    Principle {
        title: "Data-Informed",
        description: "I combine quantitative analytics with qualitative insights to make informed design decisions and measure success.",
    },
    Principle {
        title: "Collaborative",
        description: "The best solutions emerge from diverse perspectives. I work closely with stakeholders, users, and teammates.",
    },
    Principle {
        title: "Iterative",
        description: "Design is never 'done.' I believe in continuous improvement through testing, feedback, and optimization.",
    },
    Principle {
        title: "Accessible",
        description: "Good design works for everyone. I ensure solutions are inclusive and accessible from the very beginning.",
    },
];

pub const DESIGN_TOOLS: &[&str] = &[
    "Figma", "Sketch", "Principle", "Framer", "Miro", "FigJam", "Notion", "Linear",
];

pub const RESEARCH_METHODS: &[&str] = &[
    "User Interviews",
    "Usability Testing",
    "Card Sorting",
    "A/B Testing",
    "Analytics Review",
    "Competitive Analysis",
    "Journey Mapping",
    "Persona Development",
];

// ============================================================================
// About page
// ============================================================================

pub const STORY: &[&str] = &[
    "My journey into design started with a simple question: \"Why is this so hard to use?\" As a psychology major turned designer, I've always been fascinated by the intersection of human behavior and technology.",
    "Over the past 8 years, I've had the privilege of working with three high-growth startups, helping them scale from Series A through IPO. Each experience taught me something different about systematic thinking, team leadership, and the power of design systems.",
    "What drives me is the challenge of turning complex, messy problems into elegant, intuitive solutions. I believe great design isn't just about making things look good; it's about creating systems that empower teams and delight users at scale.",
];

pub struct Job {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCE: &[Job] = &[
    Job {
        period: "2021 - Present",
        role: "Senior Product Designer",
        company: "TechFlow (Series B)",
        description: "Leading design for core product areas. Built comprehensive design system that reduced development time by 40%. Managing a team of 3 designers.",
        achievements: &[
            "Increased user retention by 35%",
            "Shipped 15+ major features",
            "Established design ops process",
        ],
    },
    Job {
        period: "2019 - 2021",
        role: "Product Designer",
        company: "DataSync (Series A -> B)",
        description: "First design hire. Created entire design system from scratch. Worked closely with engineering to establish design-dev workflows.",
        achievements: &[
            "Reduced support tickets by 60%",
            "Launched mobile app",
            "Grew design team from 1 to 4",
        ],
    },
    Job {
        period: "2017 - 2019",
        role: "UX Designer",
        company: "StartupCo (Seed -> A)",
        description: "Joined as employee #12. Wore many hats including user research, product strategy, and visual design. Helped secure Series A funding.",
        achievements: &[
            "0 -> 10k users",
            "Launched core platform",
            "Conducted 100+ user interviews",
        ],
    },
];

pub const CORE_SKILLS: &[&str] = &[
    "Design Systems",
    "User Research",
    "Product Strategy",
    "Team Leadership",
    "Information Architecture",
    "Interaction Design",
    "Design Operations",
    "Cross-functional Collaboration",
];

pub struct Philosophy {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PHILOSOPHY: &[Philosophy] = &[
    Philosophy {
        title: "Systems Thinking",
        description: "Every design decision should scale and serve the larger ecosystem.",
    },
    Philosophy {
        title: "Data-Informed",
        description: "Combine quantitative insights with qualitative understanding.",
    },
    Philosophy {
        title: "Collaborative",
        description: "The best solutions emerge from diverse perspectives working together.",
    },
];

// ============================================================================
// Landing page
// ============================================================================

pub struct SkillBar {
    pub name: &'static str,
    /// 0-100, rendered as a proportional gauge.
    pub level: u8,
}

pub const SKILLS: &[SkillBar] = &[
    SkillBar { name: "Design Strategy", level: 95 },
    SkillBar { name: "Visual Design", level: 90 },
    SkillBar { name: "Prototyping", level: 85 },
    SkillBar { name: "Design Systems", level: 92 },
];

pub struct LandingStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const LANDING_STEPS: &[LandingStep] = &[
    LandingStep {
        step: "01",
        title: "Research",
        description: "Deep dive into user needs and business goals",
    },
    LandingStep {
        step: "02",
        title: "Design",
        description: "Craft solutions that balance form and function",
    },
    LandingStep {
        step: "03",
        title: "Prototype",
        description: "Build interactive experiences for validation",
    },
    LandingStep {
        step: "04",
        title: "Iterate",
        description: "Refine based on testing and feedback",
    },
];

pub struct FeaturedProject {
    pub title: &'static str,
    pub kind: &'static str,
    pub metric: &'static str,
    pub description: &'static str,
}

pub const FEATURED: &[FeaturedProject] = &[
    FeaturedProject {
        title: "FinTech Mobile App",
        kind: "Mobile Design",
        metric: "40% increase in user engagement",
        description: "Complete redesign focusing on user onboarding and core financial features",
    },
    FeaturedProject {
        title: "B2B Dashboard",
        kind: "Data Visualization",
        metric: "60% reduction in support tickets",
        description: "Intuitive analytics platform for complex business intelligence",
    },
    FeaturedProject {
        title: "Design System",
        kind: "System Design",
        metric: "3x faster development",
        description: "Comprehensive component library and design guidelines",
    },
];

// ============================================================================
// Contact page
// ============================================================================

pub const LOOKING_FOR: &[&str] = &[
    "Senior IC role or design leadership position",
    "Series A through Series C startups",
    "Teams that value systematic design thinking",
    "Opportunities to build and scale design systems",
    "Products that make a meaningful impact",
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What's your typical project timeline?",
        answer: "It depends on scope, but most projects range from 2-6 months. I prefer to work iteratively with regular check-ins and deliverables.",
    },
    Faq {
        question: "Do you work with agencies or only direct clients?",
        answer: "I work with both! I've collaborated with agencies on complex projects and directly with startups as an embedded team member.",
    },
    Faq {
        question: "What's your approach to remote collaboration?",
        answer: "I'm fully remote-first with experience leading distributed design teams. I use tools like Figma, Miro, and Linear for seamless collaboration.",
    },
    Faq {
        question: "Do you provide ongoing design support?",
        answer: "Yes! I offer ongoing design partnerships for teams who need consistent strategic design support without a full-time hire.",
    },
    Faq {
        question: "What industries do you have experience in?",
        answer: "I've worked primarily in fintech, SaaS, and consumer apps. I'm always excited to learn new domains and bring fresh perspectives.",
    },
    Faq {
        question: "Do you work on design systems?",
        answer: "Absolutely! Design systems are one of my specialties. I love helping teams scale their design operations and maintain consistency.",
    },
];

pub const RESPONSE_TIME: &str = "I typically respond to all inquiries within 24 hours. For urgent matters, feel free to mention that in your message.";
