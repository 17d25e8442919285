//! Cliente del almacen sobre la API REST de Supabase (PostgREST).
//!
//! La clave de acceso viaja en los headers `apikey` y `Authorization`; nunca se
//! escribe en los logs.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Url;
use serde::Deserialize;

use super::AlmacenPedidos;
use crate::configuracion::Configuracion;
use crate::errores::{ErrorAlmacen, ErrorConfiguracion};
use crate::pedido::Pedido;

const RUTA_REST: &str = "rest/v1";

#[derive(Debug, Clone)]
pub struct ClienteSupabase {
    http: reqwest::Client,
    base_url: String,
}

impl ClienteSupabase {
    /// Crea un cliente a partir de la configuracion. Falla si la url no es
    /// http(s), si lleva query o fragmento, o si la clave no puede enviarse
    /// como header
    pub fn new(config: &Configuracion) -> Result<Self, ErrorAlmacen> {
        let url =
            Url::parse(&config.url).map_err(|e| ErrorConfiguracion::UrlInvalida(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ErrorConfiguracion::UrlInvalida(format!(
                "esquema {} no soportado",
                url.scheme()
            ))
            .into());
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ErrorConfiguracion::UrlInvalida(
                "la url base no puede llevar query ni fragmento".to_string(),
            )
            .into());
        }

        let mut apikey =
            HeaderValue::from_str(&config.clave).map_err(|_| ErrorConfiguracion::ClaveInvalida)?;
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.clave))
            .map_err(|_| ErrorConfiguracion::ClaveInvalida)?;
        apikey.set_sensitive(true);
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", apikey);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn url_tabla(&self, tabla: &str) -> String {
        format!("{}/{}/{}", self.base_url, RUTA_REST, tabla)
    }
}

#[async_trait]
impl AlmacenPedidos for ClienteSupabase {
    async fn insertar(&self, tabla: &str, pedido: &Pedido) -> Result<(), ErrorAlmacen> {
        let url = self.url_tabla(tabla);
        tracing::debug!(%url, pedido = %pedido.order_number, "insertando fila");

        let respuesta = self
            .http
            .post(url)
            .header("Prefer", "return=minimal")
            .json(pedido)
            .send()
            .await?;

        let estado = respuesta.status();
        tracing::debug!(estado = estado.as_u16(), "respuesta de insercion");
        if estado.is_success() {
            return Ok(());
        }

        let cuerpo = respuesta.text().await?;
        Err(ErrorAlmacen::Rechazo {
            estado: estado.as_u16(),
            detalle: detalle_de_rechazo(&cuerpo),
        })
    }

    async fn sondear(&self, tabla: &str) -> Result<usize, ErrorAlmacen> {
        let url = self.url_tabla(tabla);
        tracing::debug!(%url, "sondeando tabla");

        let respuesta = self
            .http
            .get(url)
            .query(&[("select", "*"), ("limit", "1")])
            .send()
            .await?;

        let estado = respuesta.status();
        if !estado.is_success() {
            let cuerpo = respuesta.text().await?;
            return Err(ErrorAlmacen::Rechazo {
                estado: estado.as_u16(),
                detalle: detalle_de_rechazo(&cuerpo),
            });
        }

        let filas: Vec<serde_json::Value> = respuesta.json().await?;
        Ok(filas.len())
    }
}

/// Cuerpo de error que devuelve PostgREST
#[derive(Debug, Deserialize)]
struct ErrorPostgrest {
    message: String,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Arma un texto legible con el motivo del rechazo. Si el cuerpo no es un
/// error de PostgREST se devuelve tal cual
fn detalle_de_rechazo(cuerpo: &str) -> String {
    let error: ErrorPostgrest = match serde_json::from_str(cuerpo) {
        Ok(error) => error,
        Err(_) if cuerpo.trim().is_empty() => return "sin detalle".to_string(),
        Err(_) => return cuerpo.trim().to_string(),
    };

    let mut detalle = error.message;
    if let Some(code) = error.code {
        detalle.push_str(&format!(" (code {})", code));
    }
    if let Some(details) = error.details {
        detalle.push_str(&format!(" - {}", details));
    }
    if let Some(hint) = error.hint {
        detalle.push_str(&format!(" - hint: {}", hint));
    }
    detalle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almacen::TABLA_PEDIDOS;
    use crate::pedido::Item;
    use httpmock::prelude::*;
    use serde_json::json;

    fn pedido() -> Pedido {
        Pedido {
            order_number: "TEST-1700000000000".to_string(),
            status: "pending_print".to_string(),
            customer_name: "Client Test Ubuntu".to_string(),
            customer_phone: "0600000000".to_string(),
            payment_status: "pending".to_string(),
            items: vec![Item {
                name: "Ramen Shoyu".to_string(),
                quantity: 3,
                price: 11.5,
                options: vec!["Piment lvl 3".to_string(), "Piment lvl 3".to_string()],
                comment: None,
            }],
        }
    }

    fn cliente(url: String) -> ClienteSupabase {
        ClienteSupabase::new(&Configuracion {
            url,
            clave: "clave-anon".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_insertar_envia_headers_y_cuerpo() {
        let servidor = MockServer::start_async().await;
        let mock = servidor
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/rest/v1/orders")
                    .header("apikey", "clave-anon")
                    .header("authorization", "Bearer clave-anon")
                    .header("prefer", "return=minimal")
                    .header("content-type", "application/json")
                    .json_body(serde_json::to_value(pedido()).unwrap());
                then.status(201);
            })
            .await;

        let res = cliente(servidor.base_url())
            .insertar(TABLA_PEDIDOS, &pedido())
            .await;

        assert!(res.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_barra_final_en_la_url_no_duplica_separador() {
        let servidor = MockServer::start_async().await;
        let mock = servidor
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1/orders");
                then.status(201);
            })
            .await;

        let res = cliente(format!("{}/", servidor.base_url()))
            .insertar(TABLA_PEDIDOS, &pedido())
            .await;

        assert!(res.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rechazo_incluye_el_error_de_postgrest() {
        let servidor = MockServer::start_async().await;
        servidor
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1/orders");
                then.status(409).json_body(json!({
                    "code": "23505",
                    "message": "duplicate key value violates unique constraint",
                    "details": "Key (order_number)=(TEST-1700000000000) already exists.",
                    "hint": null
                }));
            })
            .await;

        let res = cliente(servidor.base_url())
            .insertar(TABLA_PEDIDOS, &pedido())
            .await;

        match res {
            Err(ErrorAlmacen::Rechazo { estado, detalle }) => {
                assert_eq!(estado, 409);
                assert!(detalle.contains("duplicate key value"));
                assert!(detalle.contains("23505"));
                assert!(detalle.contains("TEST-1700000000000"));
            }
            otro => panic!("se esperaba un rechazo, llego {:?}", otro),
        }
    }

    #[tokio::test]
    async fn test_rechazo_con_cuerpo_que_no_es_json() {
        let servidor = MockServer::start_async().await;
        servidor
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1/orders");
                then.status(502).body("Bad Gateway");
            })
            .await;

        let res = cliente(servidor.base_url())
            .insertar(TABLA_PEDIDOS, &pedido())
            .await;

        match res {
            Err(ErrorAlmacen::Rechazo { estado, detalle }) => {
                assert_eq!(estado, 502);
                assert_eq!(detalle, "Bad Gateway");
            }
            otro => panic!("se esperaba un rechazo, llego {:?}", otro),
        }
    }

    #[tokio::test]
    async fn test_sin_servidor_es_error_de_transporte() {
        let res = cliente("http://127.0.0.1:1".to_string())
            .insertar(TABLA_PEDIDOS, &pedido())
            .await;

        assert!(matches!(res, Err(ErrorAlmacen::Transporte(_))));
    }

    #[tokio::test]
    async fn test_sondear_cuenta_filas() {
        let servidor = MockServer::start_async().await;
        let mock = servidor
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/rest/v1/orders")
                    .query_param("select", "*")
                    .query_param("limit", "1")
                    .header("apikey", "clave-anon");
                then.status(200).json_body(json!([{ "order_number": "TEST-1" }]));
            })
            .await;

        let filas = cliente(servidor.base_url())
            .sondear(TABLA_PEDIDOS)
            .await
            .unwrap();

        assert_eq!(filas, 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_sondear_tabla_inexistente() {
        let servidor = MockServer::start_async().await;
        servidor
            .mock_async(|when, then| {
                when.method(GET).path("/rest/v1/orders");
                then.status(404).json_body(json!({
                    "code": "42P01",
                    "message": "relation \"public.orders\" does not exist"
                }));
            })
            .await;

        let res = cliente(servidor.base_url()).sondear(TABLA_PEDIDOS).await;

        assert!(matches!(res, Err(ErrorAlmacen::Rechazo { estado: 404, .. })));
    }

    #[test]
    fn test_url_invalida_no_construye_cliente() {
        for url in ["no es una url", "ftp://abc.supabase.co"] {
            let res = ClienteSupabase::new(&Configuracion {
                url: url.to_string(),
                clave: "clave-anon".to_string(),
            });
            assert!(matches!(res, Err(ErrorAlmacen::Construccion(_))));
        }
    }

    #[test]
    fn test_url_con_query_o_fragmento_no_construye_cliente() {
        for url in ["https://abc.supabase.co?a=b", "https://abc.supabase.co/#seccion"] {
            let res = ClienteSupabase::new(&Configuracion {
                url: url.to_string(),
                clave: "clave-anon".to_string(),
            });
            assert!(matches!(res, Err(ErrorAlmacen::Construccion(_))));
        }
    }

    #[test]
    fn test_url_de_tabla_sobre_la_url_base() {
        let cliente = cliente("https://abc.supabase.co/".to_string());
        assert_eq!(
            cliente.url_tabla(TABLA_PEDIDOS),
            "https://abc.supabase.co/rest/v1/orders"
        );
    }

    #[test]
    fn test_clave_con_salto_de_linea_no_construye_cliente() {
        let res = ClienteSupabase::new(&Configuracion {
            url: "https://abc.supabase.co".to_string(),
            clave: "clave\nanon".to_string(),
        });
        assert!(matches!(res, Err(ErrorAlmacen::Construccion(_))));
    }

    #[test]
    fn test_detalle_de_rechazo_vacio() {
        assert_eq!(detalle_de_rechazo("  "), "sin detalle");
    }
}
