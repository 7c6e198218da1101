//! Android storage permissions via JNI.
//!
//! Exports go to user-chosen folders on shared storage. Up to Android 10 that
//! needs WRITE_EXTERNAL_STORAGE; from Android 11 it needs "All files access",
//! which can only be granted from the settings screen.

use super::StoragePermissionStatus;
use jni::JNIEnv;
use jni::objects::{JObject, JValue};

const WRITE_EXTERNAL_STORAGE: &str = "android.permission.WRITE_EXTERNAL_STORAGE";
const PERMISSION_GRANTED: i32 = 0; // PackageManager.PERMISSION_GRANTED
const FLAG_ACTIVITY_NEW_TASK: i32 = 0x10000000;
const ANDROID_11: i32 = 30;

/// Build.VERSION.SDK_INT
fn sdk_version(env: &mut JNIEnv) -> Result<i32, jni::errors::Error> {
    let build_version = env.find_class("android/os/Build$VERSION")?;
    env.get_static_field(build_version, "SDK_INT", "I")?.i()
}

fn has_write_permission(env: &mut JNIEnv, context: &JObject) -> Result<bool, jni::errors::Error> {
    let context_compat = env.find_class("androidx/core/content/ContextCompat")?;
    let permission = env.new_string(WRITE_EXTERNAL_STORAGE)?;

    let result = env.call_static_method(
        context_compat,
        "checkSelfPermission",
        "(Landroid/content/Context;Ljava/lang/String;)I",
        &[JValue::Object(context), JValue::Object(&permission.into())],
    )?;

    Ok(result.i()? == PERMISSION_GRANTED)
}

/// Environment.isExternalStorageManager()
fn is_storage_manager(env: &mut JNIEnv) -> Result<bool, jni::errors::Error> {
    let environment = env.find_class("android/os/Environment")?;
    env.call_static_method(environment, "isExternalStorageManager", "()Z", &[])?
        .z()
}

/// Start the settings activity named by the `Settings.<action>` constant,
/// scoped to this app's package.
fn open_settings(
    env: &mut JNIEnv,
    context: &JObject,
    action: &str,
) -> Result<(), jni::errors::Error> {
    let settings = env.find_class("android/provider/Settings")?;
    let action = env.get_static_field(settings, action, "Ljava/lang/String;")?;

    let intent_class = env.find_class("android/content/Intent")?;
    let intent = env.new_object(
        intent_class,
        "(Ljava/lang/String;)V",
        &[JValue::Object(&action.l()?)],
    )?;

    // Uri.parse("package:" + packageName)
    let package_name: jni::objects::JString = env
        .call_method(context, "getPackageName", "()Ljava/lang/String;", &[])?
        .l()?
        .into();
    let package_name: String = env.get_string(&package_name)?.into();
    let uri_string = env.new_string(format!("package:{package_name}"))?;
    let uri_class = env.find_class("android/net/Uri")?;
    let uri = env.call_static_method(
        uri_class,
        "parse",
        "(Ljava/lang/String;)Landroid/net/Uri;",
        &[JValue::Object(&uri_string.into())],
    )?;

    env.call_method(
        &intent,
        "setData",
        "(Landroid/net/Uri;)Landroid/content/Intent;",
        &[JValue::Object(&uri.l()?)],
    )?;
    env.call_method(
        &intent,
        "addFlags",
        "(I)Landroid/content/Intent;",
        &[JValue::Int(FLAG_ACTIVITY_NEW_TASK)],
    )?;
    env.call_method(
        context,
        "startActivity",
        "(Landroid/content/Intent;)V",
        &[JValue::Object(&intent)],
    )?;

    Ok(())
}

/// Run `f` against the activity context, logging JNI failures
fn with_jni<F, T>(f: F) -> Option<T>
where
    F: FnOnce(&mut JNIEnv, JObject) -> Result<T, jni::errors::Error>,
{
    let ctx = ndk_context::android_context();
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }.ok()?;
    let mut env = vm.attach_current_thread().ok()?;
    let context = unsafe { JObject::from_raw(ctx.context().cast()) };

    match f(&mut env, context) {
        Ok(result) => Some(result),
        Err(e) => {
            log::error!("JNI error: {e}");
            None
        }
    }
}

/// Check if the app may write to folders on shared storage.
pub fn check_storage_permission() -> StoragePermissionStatus {
    with_jni(|env, context| {
        let sdk = sdk_version(env)?;
        log::info!("Android SDK version: {sdk}");

        if sdk >= ANDROID_11 {
            if is_storage_manager(env)? {
                Ok(StoragePermissionStatus::Granted)
            } else {
                Ok(StoragePermissionStatus::NeedsSettingsIntent)
            }
        } else if has_write_permission(env, &context)? {
            Ok(StoragePermissionStatus::Granted)
        } else {
            Ok(StoragePermissionStatus::Denied)
        }
    })
    .unwrap_or(StoragePermissionStatus::Denied)
}

/// Open the settings page where the storage permission is granted.
///
/// Returns `true` if the settings page was opened.
pub fn request_storage_permission() -> bool {
    with_jni(|env, context| {
        let action = if sdk_version(env)? >= ANDROID_11 {
            "ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION"
        } else {
            "ACTION_APPLICATION_DETAILS_SETTINGS"
        };
        open_settings(env, &context, action)
    })
    .is_some()
}
