//! Bridge between `tabagent-execution-providers` and `ort`'s own execution
//! provider types.
//!
//! This module converts the workspace's universal, format-agnostic execution
//! providers into `ort`-specific dispatch types accepted by `SessionBuilder`.

use crate::error::{OnnxError, Result};
use std::sync::Arc;
use tabagent_execution_providers::{BackendType, ExecutionProvider};

/// Converts workspace execution providers to `ort` execution providers.
///
/// Unsupported providers are logged and skipped; if nothing bridges
/// successfully, falls back to a bare CPU provider so session creation never
/// fails purely because of an unavailable accelerator feature.
pub fn bridge_to_ort(
    providers: &[Arc<dyn ExecutionProvider>],
) -> Result<Vec<ort::execution_providers::ExecutionProviderDispatch>> {
    let mut ort_providers = Vec::new();

    for provider in providers {
        match convert_provider(provider) {
            Some(ort_provider) => {
                log::info!("bridged {} provider to ort", provider.name());
                ort_providers.push(ort_provider);
            }
            None => {
                log::warn!(
                    "provider {} ({:?}) not supported for onnx, skipping",
                    provider.name(),
                    provider.backend_type()
                );
            }
        }
    }

    if ort_providers.is_empty() {
        log::warn!("no providers bridged, falling back to cpu");
        ort_providers.push(ort::execution_providers::CPUExecutionProvider::default().build());
    }

    Ok(ort_providers)
}

fn convert_provider(
    provider: &Arc<dyn ExecutionProvider>,
) -> Option<ort::execution_providers::ExecutionProviderDispatch> {
    use tabagent_execution_providers::constants::*;

    let config = provider.config();

    match provider.backend_type() {
        BackendType::Cuda => {
            #[cfg(feature = "cuda")]
            {
                let mut cuda = ort::execution_providers::CUDAExecutionProvider::default();
                if let Some(device_id) = config.get(DEVICE_ID) {
                    if let Ok(id) = device_id.parse::<i32>() {
                        cuda = cuda.with_device_id(id);
                    }
                }
                if let Some(mem_limit) = config.get(GPU_MEM_LIMIT) {
                    if let Ok(limit) = mem_limit.parse::<usize>() {
                        cuda = cuda.with_memory_limit(limit);
                    }
                }
                Some(cuda.build())
            }
            #[cfg(not(feature = "cuda"))]
            {
                log::warn!("cuda provider requested but cuda feature not enabled");
                None
            }
        }

        BackendType::TensorRT => {
            #[cfg(feature = "tensorrt")]
            {
                let mut trt = ort::execution_providers::TensorRTExecutionProvider::default();
                if let Some(device_id) = config.get(DEVICE_ID) {
                    if let Ok(id) = device_id.parse::<i32>() {
                        trt = trt.with_device_id(id);
                    }
                }
                if config.get(TRT_FP16_ENABLE).map(String::as_str) == Some("true") {
                    trt = trt.with_fp16(true);
                }
                Some(trt.build())
            }
            #[cfg(not(feature = "tensorrt"))]
            {
                log::warn!("tensorrt provider requested but tensorrt feature not enabled");
                None
            }
        }

        BackendType::DirectML => {
            #[cfg(feature = "directml")]
            {
                let mut dml = ort::execution_providers::DirectMLExecutionProvider::default();
                if let Some(device_id) = config.get(DEVICE_ID) {
                    if let Ok(id) = device_id.parse::<i32>() {
                        dml = dml.with_device_id(id);
                    }
                }
                Some(dml.build())
            }
            #[cfg(not(feature = "directml"))]
            {
                log::warn!("directml provider requested but directml feature not enabled");
                None
            }
        }

        BackendType::CoreML => {
            #[cfg(all(target_os = "macos", feature = "coreml"))]
            {
                Some(ort::execution_providers::CoreMLExecutionProvider::default().build())
            }
            #[cfg(not(all(target_os = "macos", feature = "coreml")))]
            {
                log::warn!("coreml only available on macos with the coreml feature");
                None
            }
        }

        BackendType::ROCm => {
            #[cfg(feature = "rocm")]
            {
                Some(ort::execution_providers::ROCmExecutionProvider::default().build())
            }
            #[cfg(not(feature = "rocm"))]
            {
                log::warn!("rocm provider not enabled");
                None
            }
        }

        BackendType::OpenVINO => {
            #[cfg(feature = "openvino")]
            {
                Some(ort::execution_providers::OpenVINOExecutionProvider::default().build())
            }
            #[cfg(not(feature = "openvino"))]
            {
                log::warn!("openvino provider not enabled");
                None
            }
        }

        BackendType::CPU => Some(ort::execution_providers::CPUExecutionProvider::default().build()),

        other => {
            log::warn!("provider {:?} not supported for onnx", other);
            None
        }
    }
}

/// Auto-selects execution providers for the current hardware: GPU-specific
/// providers first (if a supported vendor is present), CPU always last as a
/// guaranteed fallback.
pub fn auto_select_providers() -> Result<Vec<ort::execution_providers::ExecutionProviderDispatch>> {
    use tabagent_execution_providers::{
        CPUExecutionProvider, CUDAExecutionProvider, DirectMLExecutionProvider,
        TensorRTExecutionProvider,
    };
    use tabagent_hardware::{detect_system, GpuVendor};

    let hw = detect_system()
        .map_err(|e| OnnxError::SessionCreationFailed(format!("hardware detection failed: {}", e)))?;

    let mut providers: Vec<Arc<dyn ExecutionProvider>> = Vec::new();

    if let Some(gpu) = hw.gpus.first() {
        match gpu.vendor {
            GpuVendor::Nvidia => {
                providers.push(TensorRTExecutionProvider::new().with_fp16_enable(true).build());
                providers.push(CUDAExecutionProvider::new().with_device_id(0).build());
            }
            GpuVendor::Amd | GpuVendor::Intel => {
                #[cfg(target_os = "windows")]
                providers.push(DirectMLExecutionProvider::new().build());
            }
            _ => {}
        }
    }

    providers.push(CPUExecutionProvider::new().build());
    bridge_to_ort(&providers)
}
