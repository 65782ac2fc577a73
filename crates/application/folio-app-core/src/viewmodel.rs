use crate::domain::AppState;
use folio_core::BookViewModel;

// --- Promotional placeholder ---

#[derive(Debug, Clone)]
pub struct PromoVm {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub featured_title: &'static str,
    pub featured_authors: &'static str,
    pub price_label: &'static str,
    pub pitch: &'static str,
    /// A first selection is being fetched.
    pub is_loading: bool,
}

impl PromoVm {
    pub fn featured(is_loading: bool) -> Self {
        Self {
            heading: "Welcome to B-World!",
            tagline: "Check out our latest collection of books. Here's a featured title for you!",
            featured_title: "The Art of Coding",
            featured_authors: "Mohammad Majid al-Rifaie, Anna Ursyn, Theodor Wyeld",
            price_label: "Price: $24.99",
            pitch: "Discover the secrets to becoming a coding expert. This book offers insights \
                    and practical advice for all levels, whether you're a beginner just starting \
                    your programming journey or an experienced developer looking to refine your \
                    skills. Dive into real-world examples, step-by-step tutorials, and expert tips \
                    that will guide you through mastering key concepts, writing clean code, and \
                    solving complex problems efficiently.",
            is_loading,
        }
    }
}

// --- Book detail ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailVm {
    pub url: String,
    pub label: String,
    pub is_main: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaRowVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct BookDetailVm {
    pub book_id: String,
    pub title: String,
    pub byline: String,
    pub price_label: String,
    pub description: String,
    pub main_image: String,
    pub thumbnails: Vec<ThumbnailVm>,
    pub quantity: u32,
    pub quantity_min: u32,
    pub meta: Vec<MetaRowVm>,
    /// A newer selection is being fetched; the current book stays on screen.
    pub is_loading: bool,
}

fn meta_rows(book: &BookViewModel) -> Vec<MetaRowVm> {
    vec![
        MetaRowVm {
            label: "Publisher",
            value: book.publisher.clone(),
        },
        MetaRowVm {
            label: "Publication Date",
            value: book.publication_date.clone(),
        },
        MetaRowVm {
            label: "Language",
            value: book.language.clone(),
        },
        MetaRowVm {
            label: "Length",
            value: format!("{} pages", book.page_count),
        },
    ]
}

fn book_detail_vm(state: &AppState, book: &BookViewModel) -> BookDetailVm {
    BookDetailVm {
        book_id: book.id.clone(),
        title: book.title.clone(),
        byline: format!("By {}", book.author),
        price_label: format!("${}", book.price),
        description: book.description.clone(),
        main_image: state.main_image.clone(),
        thumbnails: book
            .images
            .iter()
            .enumerate()
            .map(|(ix, url)| ThumbnailVm {
                url: url.clone(),
                label: format!("Thumbnail {}", ix + 1),
                is_main: *url == state.main_image,
            })
            .collect(),
        quantity: state.quantity,
        quantity_min: folio_config::QUANTITY_INPUT_MIN,
        meta: meta_rows(book),
        is_loading: state.is_loading(),
    }
}

#[derive(Debug, Clone)]
pub enum DetailScreenVm {
    Promo(PromoVm),
    Book(BookDetailVm),
}

pub fn detail_screen_vm(state: &AppState) -> DetailScreenVm {
    match &state.book {
        Some(book) => DetailScreenVm::Book(book_detail_vm(state, book)),
        None => DetailScreenVm::Promo(PromoVm::featured(state.is_loading())),
    }
}
