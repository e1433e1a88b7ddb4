//! Content model for the studio's single-page site
//!
//! Pure data: section copy, media references, and gallery layout hints.
//! Rendering, layout, and animation wiring live in the front end.

/// Top-level sections in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    AboutGame,
    GameplayLore,
    Gallery,
    AboutStudio,
    Footer,
}

#[derive(Debug, Clone)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub banner_media: &'static str,
    pub actions: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct InfoCard {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone)]
pub struct AboutGame {
    pub heading: &'static str,
    pub body: &'static str,
    pub cards: Vec<InfoCard>,
}

/// One lore block: copy beside a looping media clip
#[derive(Debug, Clone)]
pub struct LoreSection {
    pub title: &'static str,
    pub body: &'static str,
    pub media_src: &'static str,
    pub media_alt: &'static str,
    /// Clip sits on the right of the copy (alternates down the page)
    pub media_right: bool,
}

#[derive(Debug, Clone)]
pub struct GameplayLore {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub sections: Vec<LoreSection>,
}

/// Gallery tile with bento-grid span hints
#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub id: u32,
    pub src: &'static str,
    pub wide: bool,
    pub tall: bool,
}

#[derive(Debug, Clone)]
pub struct Gallery {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub blurb: &'static str,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone)]
pub struct AboutStudio {
    pub name: &'static str,
    pub tagline: &'static str,
    pub features: Vec<InfoCard>,
}

#[derive(Debug, Clone)]
pub struct Footer {
    pub studio: &'static str,
    pub links: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Page {
    pub hero: Hero,
    pub about: AboutGame,
    pub lore: GameplayLore,
    pub gallery: Gallery,
    pub studio: AboutStudio,
    pub footer: Footer,
}

impl Page {
    /// The page as shipped
    pub fn bloodline_vengeance() -> Self {
        Self {
            hero: Hero {
                title: "Bloodline Vengeance",
                tagline: "A dark fantasy action RPG of betrayal, ancient magic, and relentless combat",
                banner_media: "/banner vid.mp4",
                actions: &["Join Our Discord", "Watch on YouTube"],
            },
            about: AboutGame {
                heading: "About the Game",
                body: "Bloodline Vengeance is a dark fantasy action RPG that plunges you \
                       into a world of betrayal, ancient magic, and relentless combat. As \
                       the last of a noble bloodline, you must reclaim your honor and seek \
                       vengeance against the shadowy forces that destroyed your family.",
                cards: vec![
                    InfoCard {
                        title: "Available Platforms",
                        detail: "PC, PlayStation, Xbox",
                    },
                    InfoCard {
                        title: "In Development",
                        detail: "Wishlist now",
                    },
                ],
            },
            lore: GameplayLore {
                heading: "The Lore of the Shattered Realms",
                subheading: "Discover the rich history and mysteries of our world",
                sections: vec![
                    LoreSection {
                        title: "Echoes of Eternity: Ancient Architecture",
                        body: "Wander through the breathtaking ruins of a bygone era. \
                               Discover colossal structures and intricate designs that \
                               whisper tales of forgotten gods and powerful civilizations, \
                               each stone steeped in history and ripe for exploration.",
                        media_src: "/temple480.webm",
                        media_alt: "Ancient ruins with intricate carvings and towering stone structures",
                        media_right: false,
                    },
                    LoreSection {
                        title: "Worlds Beyond Imagination: Creative Environments",
                        body: "Traverse truly unique and visually stunning landscapes. From \
                               shimmering crystal caverns and sky-piercing cities to \
                               swirling elemental plains, each environment offers a new set \
                               of challenges and awe-inspiring vistas.",
                        media_src: "/environment480.webm",
                        media_alt: "Stunning fantasy landscape with floating islands and magical elements",
                        media_right: true,
                    },
                ],
            },
            gallery: Gallery {
                eyebrow: "Portfolio",
                heading: "Our Creative Work",
                blurb: "Discover our curated selection of projects that showcase our \
                        expertise and commitment to excellence in every detail.",
                images: vec![
                    GalleryImage { id: 1, src: "/HighresScreenshot00000.webp", wide: true, tall: true },
                    GalleryImage { id: 2, src: "/HighresScreenshot00034.webp", wide: false, tall: false },
                    GalleryImage { id: 3, src: "/HighresScreenshot00033.webp", wide: false, tall: false },
                    GalleryImage { id: 4, src: "/HighresScreenshot00031.webp", wide: false, tall: false },
                    GalleryImage { id: 5, src: "/HighresScreenshot00028.webp", wide: false, tall: false },
                    GalleryImage { id: 6, src: "/HighresScreenshot00017.webp", wide: true, tall: true },
                    GalleryImage { id: 7, src: "/HighresScreenshot00022.webp", wide: false, tall: false },
                    GalleryImage { id: 8, src: "/HighresScreenshot00040.webp", wide: false, tall: false },
                    GalleryImage { id: 9, src: "/HighresScreenshot00030.webp", wide: true, tall: false },
                    GalleryImage { id: 13, src: "/HighresScreenshot00049.webp", wide: false, tall: false },
                    GalleryImage { id: 14, src: "/HighresScreenshot00044.webp", wide: false, tall: false },
                    GalleryImage { id: 15, src: "/HighresScreenshot00053.webp", wide: true, tall: false },
                ],
            },
            studio: AboutStudio {
                name: "Reclone Studios",
                tagline: "Creating immersive gaming experiences",
                features: vec![
                    InfoCard {
                        title: "Immersive Games",
                        detail: "Crafting unforgettable gaming experiences",
                    },
                    InfoCard {
                        title: "Cutting-Edge Tech",
                        detail: "Leveraging the latest technologies",
                    },
                    InfoCard {
                        title: "Stunning Art",
                        detail: "Beautiful visuals that bring worlds to life",
                    },
                ],
            },
            footer: Footer {
                studio: "Reclone Studios",
                links: &["Privacy Policy", "Terms of Service"],
            },
        }
    }
}
