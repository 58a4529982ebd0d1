use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::json;

use bookshelf_http::error::AppError;
use bookshelf_kernel::{InitCtx, Module};
use bookshelf_store::{Book, BookDraft, BookId, BookRepository};

/// Message returned by every id-keyed lookup that misses.
const RECORD_NOT_FOUND: &str = "Record is not found";

type Store = Arc<dyn BookRepository>;

/// CRUD module for the book resource, mounted at `/books`.
pub struct BooksModule {
    store: Store,
}

impl BooksModule {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "All stored books",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/Book"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Add a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "$ref": "#/components/schemas/BookDraft"
                                    }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "The saved book",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Book"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "put": {
                        "summary": "Update a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "$ref": "#/components/schemas/Book"
                                    }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "The merged and saved book",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Book"
                                        }
                                    }
                                }
                            },
                            "404": {
                                "description": "No book with the payload's id",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorBody"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{bookId}": {
                    "get": {
                        "summary": "Get book by id",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "bookId",
                                "in": "path",
                                "required": true,
                                "schema": {
                                    "type": "integer",
                                    "format": "int64"
                                }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "The stored book",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Book"
                                        }
                                    }
                                }
                            },
                            "404": {
                                "description": "No book with this id",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorBody"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "delete": {
                        "summary": "Delete book by id",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "bookId",
                                "in": "path",
                                "required": true,
                                "schema": {
                                    "type": "integer",
                                    "format": "int64"
                                }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Deleted"
                            },
                            "404": {
                                "description": "No book with this id",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorBody"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "bookId": {
                                "type": "integer",
                                "format": "int64",
                                "description": "Unique identifier for the book"
                            },
                            "name": {
                                "type": "string",
                                "description": "Name of the book"
                            },
                            "summary": {
                                "type": "string",
                                "description": "Short summary of the book"
                            },
                            "rating": {
                                "type": "integer",
                                "format": "int32",
                                "description": "Rating of the book"
                            }
                        },
                        "required": ["bookId", "name", "summary", "rating"]
                    },
                    "BookDraft": {
                        "type": "object",
                        "properties": {
                            "bookId": {
                                "type": "integer",
                                "format": "int64",
                                "description": "Optional identity; the store assigns one when absent"
                            },
                            "name": {
                                "type": "string",
                                "description": "Name of the book"
                            },
                            "summary": {
                                "type": "string",
                                "description": "Short summary of the book"
                            },
                            "rating": {
                                "type": "integer",
                                "format": "int32",
                                "description": "Rating of the book"
                            }
                        },
                        "required": ["name", "summary", "rating"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Explicit route table for the book resource.
fn routes(store: Store) -> Router {
    Router::new()
        .route("/", get(list_books).post(create_book).put(update_book))
        .route("/{bookId}", get(get_book).delete(delete_book))
        .with_state(store)
}

/// List every stored book.
async fn list_books(State(store): State<Store>) -> Result<Json<Vec<Book>>, AppError> {
    Ok(Json(store.find_all().await?))
}

/// Look up a record; the single origin of the not-found error.
async fn fetch_book(store: &Store, book_id: BookId) -> Result<Book, AppError> {
    store
        .find_by_id(book_id)
        .await?
        .ok_or_else(|| AppError::not_found(RECORD_NOT_FOUND))
}

async fn get_book(
    State(store): State<Store>,
    Path(book_id): Path<BookId>,
) -> Result<Json<Book>, AppError> {
    Ok(Json(fetch_book(&store, book_id).await?))
}

/// Save a new book; id policy (assign vs. accept) belongs to the store.
async fn create_book(
    State(store): State<Store>,
    Json(draft): Json<BookDraft>,
) -> Result<Json<Book>, AppError> {
    Ok(Json(store.save(draft).await?))
}

/// Overwrite name, summary, and rating of the existing record, keeping any
/// other stored fields, then save the merged record.
async fn update_book(
    State(store): State<Store>,
    Json(payload): Json<Book>,
) -> Result<Json<Book>, AppError> {
    let mut existing = fetch_book(&store, payload.book_id).await?;

    existing.name = payload.name;
    existing.summary = payload.summary;
    existing.rating = payload.rating;

    Ok(Json(store.save(existing.into()).await?))
}

async fn delete_book(
    State(store): State<Store>,
    Path(book_id): Path<BookId>,
) -> Result<(), AppError> {
    fetch_book(&store, book_id).await?;
    store.delete_by_id(book_id).await?;
    Ok(())
}

/// Create a new instance of the books module over the given store.
pub fn create_module(store: Store) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(store))
}
