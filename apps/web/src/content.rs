//! Static site content: portfolio cards and the services list.
//!
//! These are fixed at compile time; the resume record (including the skills
//! table rendered on the skills page) lives in `resume::record`.

/// One portfolio project card.
#[derive(Debug, Clone)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
}

/// One entry on the services page.
#[derive(Debug, Clone)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        title: "EMPLOY SALARY PREDICTION",
        description: "Designed and implemented Flutter mobile application to promote food \
                      transparency by scanning barcodes and retrieving ingredients, and \
                      Nutri-Score data. Integrated Firebase Authentication for secure user \
                      login and implemented backend logic using API calls.",
        image: "project_salary.jpg",
        technologies: &["Flutter", "Firebase (Auth)", "Dart"],
    },
    PortfolioItem {
        id: 2,
        title: "PERSONALIZED EDUCATIONAL PLATFORM",
        description: "Developed a mobile application that provides real-time scene \
                      descriptions and interactive Q/A for visually impaired users using \
                      Vision-Language Models (VLMs). Built the frontend with React Native \
                      (Expo) and backend with FastAPI (Python) integrating YOLO and Whisper \
                      for multimodal AI capabilities. Applied OCR and object detection \
                      (OpenCV, Detectron2, YOLO) to identify text, objects, and environmental \
                      hazards.",
        image: "project_education.jpg",
        technologies: &[
            "React Native",
            "FastAPI",
            "PyTorch",
            "OpenCV",
            "Detectron2",
            "YOLO",
            "TypeScript",
            "Flutter",
            "SQL",
        ],
    },
    PortfolioItem {
        id: 3,
        title: "SENSORS USING DETECTION ROBOTS (DIPLOMA)",
        description: "Using IoT and Arduino boards with IR sensors to build vehicles that \
                      detect distance.",
        image: "project_robots.jpg",
        technologies: &["IoT", "Arduino", "IR sensors"],
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Full-stack web development with modern frameworks",
        icon: "💻",
    },
    Service {
        title: "API Development",
        description: "RESTful and GraphQL API development",
        icon: "⚙️",
    },
    Service {
        title: "Database Design",
        description: "Database architecture and optimization",
        icon: "🗄️",
    },
    Service {
        title: "Consulting",
        description: "Technical consulting and code review",
        icon: "📋",
    },
];

/// Looks up a portfolio item by its card id.
pub fn find_project(id: u32) -> Option<&'static PortfolioItem> {
    PORTFOLIO_ITEMS.iter().find(|p| p.id == id)
}
