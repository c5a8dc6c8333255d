//! Pipeline de consulta de anuncios: filtrar → ordenar → paginar
//!
//! Se ejecuta por completo sobre la lista en memoria ya descargada vía
//! `vehicles`. Todas las funciones son puras respecto de (lista completa,
//! filtros, orden, página, tamaño de página): sin efectos ni caché, se
//! recalcula en cada cambio de estado.

use std::cmp::Ordering;

use crate::models::vehicle::Vehicle;

/// Estado de filtrado del listado
///
/// String vacío = filtro inactivo, igual que los selects vacíos de la UI.
#[derive(Debug, Clone, Default)]
pub struct ListingFilters {
    /// Texto libre, case-insensitive, contra marca O modelo
    pub search: String,
    /// Igualdad exacta contra condition ("New" | "Used")
    pub condition: String,
    /// Substring (case-sensitive) contra location
    pub location: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Orden por precio; None preserva el orden del filtrado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
}

/// Tamaño de página del listado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Limited(usize),
    All,
}

impl PageSize {
    /// Opciones fijas que ofrece la UI: 25 / 50 / 100 / todas
    pub const CHOICES: [PageSize; 4] = [
        PageSize::Limited(25),
        PageSize::Limited(50),
        PageSize::Limited(100),
        PageSize::All,
    ];
}

/// ¿Pasa el vehículo los cinco criterios? (AND lógico de cláusulas independientes)
pub fn matches_filters(vehicle: &Vehicle, filters: &ListingFilters) -> bool {
    let search = filters.search.to_lowercase();
    let matches_search = vehicle.brand.to_lowercase().contains(&search)
        || vehicle.model.to_lowercase().contains(&search);

    let matches_condition =
        filters.condition.is_empty() || vehicle.condition == filters.condition;

    let matches_location =
        filters.location.is_empty() || vehicle.location.contains(&filters.location);

    let matches_price = filters.min_price.map_or(true, |min| vehicle.price >= min)
        && filters.max_price.map_or(true, |max| vehicle.price <= max);

    matches_search && matches_condition && matches_location && matches_price
}

/// Filtrar la lista completa preservando el orden original
pub fn filter_vehicles<'a>(vehicles: &'a [Vehicle], filters: &ListingFilters) -> Vec<&'a Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| matches_filters(vehicle, filters))
        .collect()
}

/// Ordenación estable por precio
pub fn sort_by_price(vehicles: &mut [&Vehicle], order: SortOrder) {
    vehicles.sort_by(|a, b| {
        let ordering = a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal);
        match order {
            SortOrder::PriceAsc => ordering,
            SortOrder::PriceDesc => ordering.reverse(),
        }
    });
}

/// Página `page` (base 1) de la lista ya filtrada y ordenada
pub fn paginate<'a, 'b>(
    vehicles: &'b [&'a Vehicle],
    page: usize,
    page_size: PageSize,
) -> &'b [&'a Vehicle] {
    match page_size {
        PageSize::All => vehicles,
        PageSize::Limited(size) => {
            let page = page.max(1);
            let start = (page - 1).saturating_mul(size);
            if start >= vehicles.len() {
                return &[];
            }
            let end = (start + size).min(vehicles.len());
            &vehicles[start..end]
        }
    }
}

/// Número total de páginas: ceil(total / tamaño); "todas" siempre es 1 página
pub fn page_count(total: usize, page_size: PageSize) -> usize {
    match page_size {
        PageSize::All => 1,
        PageSize::Limited(size) => total.div_ceil(size),
    }
}

/// Pipeline completo: filtrar, ordenar (opcional) y devolver la página pedida
pub fn run_pipeline<'a>(
    vehicles: &'a [Vehicle],
    filters: &ListingFilters,
    sort: Option<SortOrder>,
    page: usize,
    page_size: PageSize,
) -> Vec<&'a Vehicle> {
    let mut filtered = filter_vehicles(vehicles, filters);
    if let Some(order) = sort {
        sort_by_price(&mut filtered, order);
    }
    paginate(&filtered, page, page_size).to_vec()
}
