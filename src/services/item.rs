//! Item services - Gestione degli articoli di magazzino
//!
//! Tutti gli endpoint qui sotto stanno dietro l'authentication middleware.
//! Create e update accettano multipart form con campo binario opzionale
//! `foto`; i campi testuali usano i nomi del contratto originale
//! (`nama`, `hargaBeli`, `hargaJual`, `stok`).

use crate::core::{AppError, AppState, FotoStorage};
use crate::dtos::{CreateItemDTO, ItemDTO, UpdateItemDTO};
use crate::repositories::{Create, Delete, Read, ReadAll, Update};
use axum::{
    extract::{Json, Multipart, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Legge un multipart form e lo trasforma in un DTO sparso.
///
/// Solo un vero file part col nome `foto` produce un riferimento foto: un
/// eventuale campo testuale `foto` viene ignorato. I campi numerici arrivano
/// come testo dal form e non vengono validati: un valore malformato degrada
/// a 0 invece di produrre un errore.
async fn read_item_form(
    mut multipart: Multipart,
    foto_storage: &FotoStorage,
) -> Result<UpdateItemDTO, AppError> {
    let mut form = UpdateItemDTO::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "foto" if field.file_name().is_some() => {
                let content_type = field.content_type().map(str::to_owned);
                let data = field.bytes().await?;
                let filename = foto_storage.save(content_type.as_deref(), &data).await?;
                form.foto = Some(filename);
            }
            "nama" => form.nama = Some(field.text().await?),
            "hargaBeli" => {
                form.harga_beli = Some(field.text().await?.trim().parse().unwrap_or_default())
            }
            "hargaJual" => {
                form.harga_jual = Some(field.text().await?.trim().parse().unwrap_or_default())
            }
            "stok" => form.stok = Some(field.text().await?.trim().parse().unwrap_or_default()),
            _ => {}
        }
    }

    Ok(form)
}

#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemDTO>>, AppError> {
    debug!("Listing all items");
    // 1. Leggere tutti gli articoli dal database
    // 2. Convertire ogni articolo in ItemDTO
    // 3. Ritornare la lista come risposta JSON
    let items = state.item.read_all().await?;
    info!("Found {} items", items.len());
    let items_dto = items.into_iter().map(ItemDTO::from).collect::<Vec<_>>();
    Ok(Json(items_dto))
}

#[instrument(skip(state), fields(item_id = %item_id))]
pub async fn get_item_by_id(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i32>, // parametro dalla URL /api/items/{id}
) -> Result<Json<ItemDTO>, AppError> {
    debug!("Fetching item by ID");
    // 1. Estrarre item_id dal path della URL
    // 2. Cercare l'articolo nel database tramite id
    // 3. Se non esiste -> 404
    // 4. Ritornare ItemDTO come risposta JSON
    match state.item.read(&item_id).await? {
        Some(item) => {
            info!("Item found");
            Ok(Json(ItemDTO::from(item)))
        }
        None => {
            warn!("Item not found");
            Err(AppError::not_found("Item not found"))
        }
    }
}

#[instrument(skip(state, multipart))]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    multipart: Multipart, // multipart form con campo binario opzionale `foto`
) -> Result<StatusCode, AppError> {
    debug!("Creating new item");
    // 1. Leggere il multipart form (l'eventuale foto viene salvata su disco
    //    e sostituita dal nome file generato)
    // 2. Inserire l'articolo con INSERT IGNORE
    // 3. Un duplicato sul nome NON è un conflitto: si logga e si risponde
    //    comunque 201
    let form = read_item_form(multipart, &state.foto).await?;
    let data = CreateItemDTO::from(form);

    match state.item.create(&data).await? {
        Some(item) => info!("Item created with id {}", item.id),
        None => info!("Item with the same name already exists"),
    }

    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, multipart), fields(item_id = %item_id))]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i32>,
    multipart: Multipart, // multipart form, tutti i campi opzionali
) -> Result<StatusCode, AppError> {
    debug!("Updating item");
    // 1. Leggere il multipart form in un DTO sparso
    // 2. Se nessun campo risulta presente -> 200 senza toccare lo storage
    // 3. Altrimenti eseguire l'update parziale con i soli campi presenti
    // 4. Ritornare 200 anche se nessuna riga corrispondeva all'id
    let form = read_item_form(multipart, &state.foto).await?;

    if form.assignments().is_empty() {
        info!("No fields supplied, nothing to update");
        return Ok(StatusCode::OK);
    }

    state.item.update(&item_id, &form).await?;
    info!("Item updated");
    Ok(StatusCode::OK)
}

#[instrument(skip(state), fields(item_id = %item_id))]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    debug!("Deleting item");
    // 1. Cancellare per id
    // 2. Ritornare 204 anche se la riga non esisteva
    state.item.delete(&item_id).await?;
    info!("Item deleted (if it existed)");
    Ok(StatusCode::NO_CONTENT)
}
