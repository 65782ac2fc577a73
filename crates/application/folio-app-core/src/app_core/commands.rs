use folio_core::BookId;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Selection (normally arrives through the bus subscription)
    SelectBook(BookId),

    // Local UI state
    SelectThumbnail(String),
    SetQuantity(u32),
    SetQuantityInput(String),

    // Outbound
    AddToCart,
}
