//! ItemRepository - Repository per la gestione degli articoli

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateItemDTO, FieldValue, UpdateItemDTO};
use crate::entities::Item;
use sqlx::{Error, MySql, MySqlPool, QueryBuilder};

pub struct ItemRepository {
    connection_pool: MySqlPool,
}

impl ItemRepository {
    pub fn new(connection_pool: MySqlPool) -> ItemRepository {
        Self { connection_pool }
    }
}

impl Create<Item, CreateItemDTO> for ItemRepository {
    /// INSERT IGNORE: un conflitto sul nome non è un errore, l'insert viene
    /// semplicemente saltato e il record esistente resta intatto
    async fn create(&self, data: &CreateItemDTO) -> Result<Option<Item>, Error> {
        let result = sqlx::query(
            "INSERT IGNORE INTO items (foto, nama, harga_beli, harga_jual, stok) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&data.foto)
        .bind(&data.nama)
        .bind(data.harga_beli)
        .bind(data.harga_jual)
        .bind(data.stok)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let new_id = result.last_insert_id() as i32;

        Ok(Some(Item {
            id: new_id,
            foto: data.foto.clone(),
            nama: data.nama.clone(),
            harga_beli: data.harga_beli,
            harga_jual: data.harga_jual,
            stok: data.stok,
        }))
    }
}

impl Read<Item, i32> for ItemRepository {
    async fn read(&self, id: &i32) -> Result<Option<Item>, Error> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, foto, nama, harga_beli, harga_jual, stok FROM items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(item)
    }
}

impl ReadAll<Item> for ItemRepository {
    async fn read_all(&self) -> Result<Vec<Item>, Error> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, foto, nama, harga_beli, harga_jual, stok FROM items",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(items)
    }
}

impl Update<UpdateItemDTO, i32> for ItemRepository {
    /// UPDATE costruito dinamicamente dalla lista di assegnamenti del DTO.
    /// Tutti i valori sono bindati come parametri, id compreso.
    async fn update(&self, id: &i32, data: &UpdateItemDTO) -> Result<(), Error> {
        let sets = data.assignments();
        if sets.is_empty() {
            return Ok(());
        }

        let mut query_builder = QueryBuilder::<MySql>::new("UPDATE items SET ");
        {
            let mut separated = query_builder.separated(", ");
            for (column, value) in sets {
                separated.push(column);
                separated.push_unseparated(" = ");
                match value {
                    FieldValue::Text(text) => separated.push_bind_unseparated(text),
                    FieldValue::Double(double) => separated.push_bind_unseparated(double),
                    FieldValue::Int(int) => separated.push_bind_unseparated(int),
                };
            }
        }
        query_builder.push(" WHERE id = ").push_bind(*id);

        query_builder
            .build()
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl Delete<i32> for ItemRepository {
    /// La cancellazione di un id inesistente non è un errore
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
